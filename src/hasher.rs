//! Midstate double-SHA256 engine for 80-byte block headers.
//!
//! A block header is hashed as SHA256(SHA256(header)) while scanning nonces.
//! The header's first 64 bytes never change across nonce trials, so the
//! compression state after that block (the midstate) is computed once per
//! header; each trial then costs one compression of the pre-padded tail
//! block plus the second hash pass, instead of re-hashing the whole header.

use crate::codec;
use crate::error::{Error, Result};
use crate::sha256::{compress, digest, serialize_state, IV};

/// Block header length in bytes.
pub const HEADER_LEN: usize = 80;

/// Nonce field length in bytes.
pub const NONCE_LEN: usize = 4;

/// Offset of the nonce field within the header.
pub const NONCE_OFFSET: usize = 76;

/// Double-SHA256 hasher with a cached midstate for one fixed header.
///
/// Construction runs the one-time initialization: the header's first block
/// is compressed from the standard IV and the result cached, and the second
/// block is pre-padded for the known 80-byte message length. [`hash`] may
/// then be called any number of times with different nonces. No trial ever
/// mutates the cached state — per-trial scratch lives on the stack — so a
/// hasher can be shared by reference across threads, or cloned to give each
/// worker its own instance.
///
/// [`hash`]: HeaderHasher::hash
#[derive(Clone)]
pub struct HeaderHasher {
    /// Compression state after the header's first 64-byte block.
    midstate: [u32; 8],
    /// Pre-padded second block: fixed header tail, nonce placeholder, 0x80
    /// marker, zero fill, and the 640-bit big-endian length field.
    tail_block: [u8; 64],
}

impl HeaderHasher {
    /// Initialize for one header. Fails unless `header` is exactly 80 bytes.
    ///
    /// The nonce field at bytes 76..80 may hold anything — every trial
    /// overwrites the nonce region of the tail block.
    pub fn new(header: &[u8]) -> Result<Self> {
        if header.len() != HEADER_LEN {
            return Err(Error::InvalidArgument(format!(
                "header must be {HEADER_LEN} bytes, got {}",
                header.len()
            )));
        }

        let mut midstate = IV;
        let first_block: &[u8; 64] = header[..64].try_into().unwrap();
        compress(&mut midstate, first_block);

        let mut tail_block = [0u8; 64];
        // Bytes 0..12: fixed header tail (merkle-root tail, time, bits).
        tail_block[..12].copy_from_slice(&header[64..NONCE_OFFSET]);
        // Bytes 12..16: nonce region, overwritten per trial.
        // Byte 16: SHA256 padding bit.
        tail_block[16] = 0x80;
        // Bytes 56..64: big-endian bit length of the 80-byte message.
        let bit_len = (HEADER_LEN as u64) * 8;
        tail_block[56..64].copy_from_slice(&bit_len.to_be_bytes());

        Ok(HeaderHasher {
            midstate,
            tail_block,
        })
    }

    /// Double-SHA256 of the header with `nonce` in the nonce field.
    pub fn hash(&self, nonce: [u8; NONCE_LEN]) -> [u8; 32] {
        let mut block = self.tail_block;
        block[12..16].copy_from_slice(&nonce);

        let mut state = self.midstate;
        compress(&mut state, &block);
        let single = serialize_state(&state);

        digest(&single)
    }

    /// [`hash`](HeaderHasher::hash) for an externally supplied nonce of
    /// unchecked length.
    pub fn hash_nonce_bytes(&self, nonce: &[u8]) -> Result<[u8; 32]> {
        let nonce: [u8; NONCE_LEN] = nonce.try_into().map_err(|_| {
            Error::InvalidArgument(format!(
                "nonce must be {NONCE_LEN} bytes, got {}",
                nonce.len()
            ))
        })?;
        Ok(self.hash(nonce))
    }

    /// The cached 8-word midstate, e.g. for shipping to per-worker hashers.
    pub fn midstate(&self) -> &[u32; 8] {
        &self.midstate
    }

    /// Hex front-end: decode header hex, initialize.
    pub fn from_hex(header_hex: &str) -> Result<Self> {
        let header = codec::hex_decode(header_hex)?;
        Self::new(&header)
    }
}
