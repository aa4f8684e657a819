//! Extensions to `std::io` traits to support reading/writing MPI values.
use std::io::{Error, ErrorKind, Read, Result, Write};

use crate::{raw, BigNum, DecodeError, HEADER_LEN};

impl From<DecodeError> for Error {
    fn from(value: DecodeError) -> Self {
        Error::new(ErrorKind::InvalidData, value)
    }
}

/// MPI-encode `v` and write it to `w`. Returns the number of bytes written.
#[inline]
pub fn write_mpi(v: &BigNum, w: &mut impl Write) -> Result<usize> {
    let buf = v.to_mpi();
    w.write_all(&buf)?;
    Ok(buf.len())
}

/// Read and decode one MPI frame from `r`.
///
/// The declared payload is read in full before decoding, so a stream that
/// ends short of its header's claim fails with `UnexpectedEof`.
pub fn read_mpi(r: &mut impl Read) -> Result<BigNum> {
    let mut header = [0u8; HEADER_LEN];
    r.read_exact(&mut header)?;
    let len = u32::from_be_bytes(header) as usize;
    let mut payload = vec![0u8; len];
    r.read_exact(&mut payload)?;
    Ok(BigNum(raw::decode_payload(&payload)))
}
