//! The MPI form: a 4-byte big-endian length header followed by the
//! sign-magnitude payload.

use bytes::{Buf, BufMut};

use crate::{raw, BigNum, HEADER_LEN};

/// Errors that may occur when decoding an MPI buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The length header claims more payload bytes than the buffer holds, or
    /// a non-empty buffer is too short to contain a header at all.
    MalformedBuffer,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for DecodeError {}

impl BigNum {
    /// Encodes `self` as an MPI buffer.
    ///
    /// Equal values always produce identical bytes; zero produces a bare
    /// header, `[0, 0, 0, 0]`.
    pub fn to_mpi(&self) -> Vec<u8> {
        let len = raw::payload_len(&self.0);
        let mut buf = Vec::with_capacity(HEADER_LEN + len);
        buf.put_u32(len as u32);
        raw::encode_payload(&self.0, &mut buf);
        buf
    }

    /// Decodes an MPI buffer.
    ///
    /// An empty buffer decodes to zero, as does a header declaring an empty
    /// payload. Bytes past the declared payload are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MalformedBuffer` when the buffer is shorter than its header
    /// claims (or too short to hold a header), rather than reading out of
    /// bounds.
    pub fn from_mpi(buf: &[u8]) -> Result<BigNum, DecodeError> {
        if buf.is_empty() {
            return Ok(BigNum::default());
        }
        if buf.len() < HEADER_LEN {
            return Err(DecodeError::MalformedBuffer);
        }
        let mut payload = buf;
        let declared = payload.get_u32() as usize;
        if declared > payload.len() {
            return Err(DecodeError::MalformedBuffer);
        }
        Ok(BigNum(raw::decode_payload(&payload[..declared])))
    }

    /// Decodes a little-endian byte vector by reversing it and running the
    /// payload decoder; bit 7 of the top (last) byte is the sign flag,
    /// exactly as in the big-endian payload. The empty vector is zero.
    pub fn from_le_bytes(bytes: &[u8]) -> BigNum {
        let mut payload = bytes.to_vec();
        payload.reverse();
        BigNum(raw::decode_payload(&payload))
    }

    /// Inverse of [`BigNum::from_le_bytes`]: the MPI payload with its byte
    /// order reversed and the length header stripped. Zero yields the empty
    /// vector.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(raw::payload_len(&self.0));
        raw::encode_payload(&self.0, &mut payload);
        payload.reverse();
        payload
    }
}
