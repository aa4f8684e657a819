//! The compact form: an MPI payload packed into one 32-bit word as
//! `payload_len:8 | mantissa:24`.
//!
//! The mantissa holds the leading payload bytes, so the sign flag sits at
//! bit 23 of the word and the value scales as `mantissa * 256^(len - 3)`.
//! Anything wider than three significant payload bytes loses its low bytes.
//! Historically used for coarse-precision difficulty targets, not general
//! integers.

use crate::{raw, BigNum};

impl BigNum {
    /// Packs the MPI payload into a compact word. Zero packs to `0`.
    ///
    /// Lossy for values whose payload exceeds 3 bytes: the surplus low bytes
    /// are dropped. The payload length wraps into the 8-bit exponent.
    pub fn to_compact(&self) -> u32 {
        let mut payload = Vec::with_capacity(raw::payload_len(&self.0));
        raw::encode_payload(&self.0, &mut payload);
        let mut word = (payload.len() as u32 & 0xff) << 24;
        for (i, &byte) in payload.iter().take(3).enumerate() {
            word |= u32::from(byte) << (16 - 8 * i);
        }
        word
    }

    /// Unpacks a compact word.
    ///
    /// The declared payload length is trusted: the mantissa supplies the
    /// leading payload bytes and any remainder is zero-filled, so
    /// `from_compact(to_compact(v)) == v` exactly when `v`'s payload fits in
    /// 3 bytes. A sign-flagged mantissa over a zero magnitude normalizes to
    /// zero.
    pub fn from_compact(word: u32) -> BigNum {
        let size = (word >> 24) as usize;
        let mut payload = vec![0u8; size];
        let mantissa = [(word >> 16) as u8, (word >> 8) as u8, word as u8];
        for (dst, src) in payload.iter_mut().zip(mantissa) {
            *dst = src;
        }
        BigNum(raw::decode_payload(&payload))
    }
}
