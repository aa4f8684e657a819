//! This module implements a sign-magnitude ("MPI") coding scheme for
//! arbitrary precision integers.
//!
//! An MPI buffer frames a signed integer as a 4-byte big-endian payload
//! length followed by the payload: the magnitude in big-endian byte order
//! with the sign carried in bit 7 of the first payload byte. When the
//! magnitude's own top bit occupies that position an extra byte is prepended
//! (`0x00` for positive values, `0x80` for negative ones) so the sign flag
//! never aliases magnitude bits. Zero encodes as a bare header with an empty
//! payload. Equal values always produce identical bytes.
//!
//! [`BigNum`] owns the arbitrary precision value itself (arithmetic is
//! delegated to [`num_bigint`]) and the codecs convert it to and from
//! external representations: the MPI form, a packed 32-bit exponent/mantissa
//! word ([`BigNum::to_compact`]), fixed-width integers up to
//! [`ruint::aliases::U256`], and decorated hex text. Values embedded in
//! larger buffers or streams go through `bytes::{Buf, BufMut}` ([`MpiBuf`],
//! [`MpiBufMut`]) or `std::io` ([`read_mpi`], [`write_mpi`]).
//!
//! ```
//! use mpi_bignum::{BigNum, MpiBuf, MpiBufMut};
//!
//! let n = BigNum::from_hex("-0x1a");
//! assert_eq!(n, BigNum::from(-26));
//! assert_eq!(n.to_mpi(), [0x00, 0x00, 0x00, 0x01, 0x9a]);
//!
//! let mut buf_mut = vec![];
//! buf_mut.put_mpi(&n);
//! buf_mut.put_mpi(&BigNum::from(0x1234u64));
//!
//! let mut buf = buf_mut.as_slice();
//! assert_eq!(buf.get_mpi().unwrap(), BigNum::from(-26));
//! assert_eq!(buf.get_mpi().unwrap(), BigNum::from(0x1234u64));
//! ```
mod bignum;
mod bytes;
mod compact;
mod hex;
mod io;
mod mpi;
mod ops;
mod raw;

pub use crate::bignum::BigNum;
pub use crate::bytes::{MpiBuf, MpiBufMut};
pub use crate::hex::ParseHexError;
pub use crate::io::{read_mpi, write_mpi};
pub use crate::mpi::DecodeError;

/// Number of bytes in the MPI length header.
pub const HEADER_LEN: usize = 4;

/// Bit 7 of the first payload byte, set when the value is negative.
pub(crate) const SIGN_BIT: u8 = 0x80;
