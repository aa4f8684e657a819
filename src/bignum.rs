//! The `BigNum` handle and its fixed-width conversions.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use ruint::aliases::U256;

use crate::{raw, SIGN_BIT};

/// Largest payload a fixed-width conversion can produce: 32 magnitude bytes
/// plus the pad byte.
const MAX_FIXED_PAYLOAD: usize = 33;

/// An arbitrary precision signed integer with deterministic byte-level
/// encodings.
///
/// Arithmetic is delegated to the wrapped [`num_bigint::BigInt`]; this type
/// exists for the codecs, which rely on exact byte layouts. Each `BigNum`
/// exclusively owns its numeric value: `Clone` copies the value into fresh
/// storage and never aliases the source.
///
/// The default value is zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNum(pub(crate) BigInt);

impl BigNum {
    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Borrows the underlying numeric value.
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Magnitude of the value truncated to 256 bits.
    ///
    /// The sign flag is masked off unconditionally, so negative values come
    /// back as their magnitude, and values wider than 32 payload bytes keep
    /// only the trailing 32. Zero maps to `U256::ZERO`. Lossy by design;
    /// validate beforehand if either drop matters.
    pub fn to_u256(&self) -> U256 {
        let mut payload = Vec::with_capacity(raw::payload_len(&self.0));
        raw::encode_payload(&self.0, &mut payload);
        if payload.is_empty() {
            return U256::ZERO;
        }
        payload[0] &= !SIGN_BIT;
        let take = payload.len().min(32);
        let mut be = [0u8; 32];
        be[32 - take..].copy_from_slice(&payload[payload.len() - take..]);
        U256::from_be_bytes(be)
    }

    /// Least-significant 64 bits of the magnitude. The sign is ignored.
    pub fn low_u64(&self) -> u64 {
        self.0.iter_u64_digits().next().unwrap_or(0)
    }

    /// Least-significant 32 bits of the magnitude. The sign is ignored.
    pub fn low_u32(&self) -> u32 {
        self.0.iter_u32_digits().next().unwrap_or(0)
    }

    /// The low magnitude word clamped into `i32` range with the sign applied,
    /// saturating at `i32::MIN`/`i32::MAX` instead of wrapping.
    pub fn to_i32_saturating(&self) -> i32 {
        let low = self.low_u64();
        if self.is_negative() {
            if low > i32::MAX as u64 {
                i32::MIN
            } else {
                -(low as i32)
            }
        } else if low > i32::MAX as u64 {
            i32::MAX
        } else {
            low as i32
        }
    }
}

/// Builds the sign-magnitude payload in a stack buffer and parses it back,
/// so the fixed-width constructors share the pad rule with the
/// variable-length codec.
fn from_magnitude(magnitude: &[u8], negative: bool) -> BigNum {
    let mut payload = [0u8; MAX_FIXED_PAYLOAD];
    let mut cursor = &mut payload[..];
    let len = raw::encode_magnitude(magnitude, negative, &mut cursor);
    BigNum(raw::decode_payload(&payload[..len]))
}

impl From<i64> for BigNum {
    fn from(n: i64) -> BigNum {
        // unsigned_abs keeps i64::MIN representable while negating
        from_magnitude(&n.unsigned_abs().to_be_bytes(), n < 0)
    }
}

impl From<u64> for BigNum {
    fn from(n: u64) -> BigNum {
        from_magnitude(&n.to_be_bytes(), false)
    }
}

impl From<U256> for BigNum {
    fn from(n: U256) -> BigNum {
        from_magnitude(&n.to_be_bytes::<32>(), false)
    }
}

macro_rules! impl_from_promoted {
    ($($int:ty => $via:ty),* $(,)?) => {$(
        impl From<$int> for BigNum {
            #[inline]
            fn from(n: $int) -> BigNum {
                BigNum::from(<$via>::from(n))
            }
        }
    )*};
}
impl_from_promoted!(i8 => i64, i16 => i64, i32 => i64, u8 => u64, u16 => u64, u32 => u64);

impl From<BigInt> for BigNum {
    fn from(value: BigInt) -> BigNum {
        BigNum(value)
    }
}

impl From<BigNum> for BigInt {
    fn from(value: BigNum) -> BigInt {
        value.0
    }
}
