//! Traits that allow writing/reading MPI-framed values on `bytes::{BufMut,Buf}`.

use bytes::{Buf, BufMut};

use crate::{raw, BigNum, DecodeError, HEADER_LEN};

/// Extension for `bytes::BufMut` to write an MPI-framed value.
pub trait MpiBufMut {
    fn put_mpi(&mut self, v: &BigNum);
}

impl<Inner: BufMut> MpiBufMut for Inner {
    /// Writes the 4-byte length header followed by the payload.
    #[inline]
    fn put_mpi(&mut self, v: &BigNum) {
        self.put_u32(raw::payload_len(v.as_bigint()) as u32);
        raw::encode_payload(v.as_bigint(), self);
    }
}

/// Extension for `bytes::Buf` to read an MPI-framed value.
pub trait MpiBuf {
    /// Reads one MPI frame from the buffer. After a successful read, the
    /// buffer will be advanced past the header and payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpi_bignum::{BigNum, MpiBufMut, MpiBuf};
    ///
    /// let to_encode = [1i64, -400, 1 << 40];
    /// let mut buf = vec![];
    /// for v in &to_encode {
    ///    buf.put_mpi(&BigNum::from(*v));
    /// }
    ///
    /// let mut buf = &buf[..];
    /// for v in &to_encode {
    ///   assert_eq!(buf.get_mpi().unwrap(), BigNum::from(*v));
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `MalformedBuffer` error if fewer than four bytes remain or
    /// the declared payload length exceeds what remains after the header.
    fn get_mpi(&mut self) -> Result<BigNum, DecodeError>;
}

impl<Inner: Buf> MpiBuf for Inner {
    fn get_mpi(&mut self) -> Result<BigNum, DecodeError> {
        if self.remaining() < HEADER_LEN {
            return Err(DecodeError::MalformedBuffer);
        }
        let declared = self.get_u32() as usize;
        if declared > self.remaining() {
            return Err(DecodeError::MalformedBuffer);
        }
        let payload = self.copy_to_bytes(declared);
        Ok(BigNum(raw::decode_payload(&payload)))
    }
}
