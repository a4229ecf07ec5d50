//! Double-SHA256 midstate hashing for 80-byte block headers.
//!
//! Mental model:
//!   codec  → byte/word/hex marshalling with explicit endianness
//!   sha256 → compression core + generic one-shot digest
//!   hasher → per-header engine: compress the fixed first block once,
//!            then pay one tail compression per nonce trial
//!
//! The engine computes hashes; which nonces to try and what counts as a
//! solution are the caller's business.

pub mod codec;
pub mod error;
pub mod hasher;
pub mod sha256;

pub use codec::{hex_decode, hex_encode, Endian};
pub use error::{Error, Result};
pub use hasher::{HeaderHasher, HEADER_LEN, NONCE_LEN, NONCE_OFFSET};
