//! Routines for working with raw sign-magnitude payloads.
//!
//! The codecs layer framing on top of these: the MPI form adds the 4-byte
//! length header, the compact form packs the payload length and leading
//! bytes into one word, and the fixed-width conversions feed stack buffers
//! through the same encode/decode pair.

use bytes::BufMut;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::SIGN_BIT;

/// Returns the number of payload bytes `encode_payload` will emit for `value`.
///
/// Zero occupies no payload bytes. A nonzero magnitude occupies its natural
/// big-endian byte count, plus one pad byte when the top magnitude bit would
/// collide with the sign flag.
pub(crate) fn payload_len(value: &BigInt) -> usize {
    let bits = value.magnitude().bits();
    if bits == 0 {
        0
    } else {
        (bits / 8 + 1) as usize
    }
}

/// Encodes `value` as a sign-magnitude payload into `buf` and returns the
/// number of bytes written.
pub(crate) fn encode_payload<B: BufMut>(value: &BigInt, buf: &mut B) -> usize {
    if value.is_zero() {
        return 0;
    }
    let (sign, magnitude) = value.to_bytes_be();
    encode_magnitude(&magnitude, sign == Sign::Minus, buf)
}

/// Encodes a big-endian magnitude (leading zero bytes allowed) plus a sign
/// into `buf` and returns the number of bytes written. An all-zero magnitude
/// encodes as the empty payload regardless of `negative`.
pub(crate) fn encode_magnitude<B: BufMut>(magnitude: &[u8], negative: bool, buf: &mut B) -> usize {
    let mut bytes = magnitude;
    while let [0, rest @ ..] = bytes {
        bytes = rest;
    }
    let Some((&top, rest)) = bytes.split_first() else {
        return 0;
    };
    if top & SIGN_BIT != 0 {
        // The natural top bit would alias the sign flag; pad with a byte
        // whose only possible set bit is the flag itself.
        buf.put_u8(if negative { SIGN_BIT } else { 0x00 });
        buf.put_u8(top);
        buf.put_slice(rest);
        bytes.len() + 1
    } else {
        buf.put_u8(if negative { top | SIGN_BIT } else { top });
        buf.put_slice(rest);
        bytes.len()
    }
}

/// Decodes a sign-magnitude payload. The empty payload is zero, and a
/// sign-flagged all-zero magnitude ("negative zero") normalizes to zero.
pub(crate) fn decode_payload(payload: &[u8]) -> BigInt {
    let Some((&first, rest)) = payload.split_first() else {
        return BigInt::zero();
    };
    let sign = if first & SIGN_BIT != 0 {
        Sign::Minus
    } else {
        Sign::Plus
    };
    let mut magnitude = Vec::with_capacity(payload.len());
    magnitude.push(first & !SIGN_BIT);
    magnitude.extend_from_slice(rest);
    // from_biguint collapses a zero magnitude to NoSign, so negative zero
    // cannot survive decoding.
    BigInt::from_biguint(sign, BigUint::from_bytes_be(&magnitude))
}
