//! Operator forwarding to the underlying arithmetic library.
//!
//! `Div` and `Rem` inherit the library's panic on a zero divisor;
//! [`BigNum::checked_div`] and [`BigNum::checked_rem`] are the propagating
//! forms.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use num_traits::CheckedDiv;

use crate::BigNum;

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for BigNum {
            type Output = BigNum;
            #[inline]
            fn $method(self, rhs: BigNum) -> BigNum {
                BigNum(self.0.$method(rhs.0))
            }
        }

        impl $trait<&BigNum> for &BigNum {
            type Output = BigNum;
            #[inline]
            fn $method(self, rhs: &BigNum) -> BigNum {
                BigNum((&self.0).$method(&rhs.0))
            }
        }

        impl $assign_trait for BigNum {
            #[inline]
            fn $assign_method(&mut self, rhs: BigNum) {
                self.0.$assign_method(rhs.0);
            }
        }

        impl $assign_trait<&BigNum> for BigNum {
            #[inline]
            fn $assign_method(&mut self, rhs: &BigNum) {
                self.0.$assign_method(&rhs.0);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

macro_rules! forward_shift {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<u32> for BigNum {
            type Output = BigNum;
            #[inline]
            fn $method(self, shift: u32) -> BigNum {
                BigNum(self.0.$method(shift))
            }
        }

        impl $trait<u32> for &BigNum {
            type Output = BigNum;
            #[inline]
            fn $method(self, shift: u32) -> BigNum {
                BigNum((&self.0).$method(shift))
            }
        }

        impl $assign_trait<u32> for BigNum {
            #[inline]
            fn $assign_method(&mut self, shift: u32) {
                self.0.$assign_method(shift);
            }
        }
    };
}

forward_shift!(Shl, shl, ShlAssign, shl_assign);
forward_shift!(Shr, shr, ShrAssign, shr_assign);

impl Neg for BigNum {
    type Output = BigNum;
    #[inline]
    fn neg(self) -> BigNum {
        BigNum(-self.0)
    }
}

impl Neg for &BigNum {
    type Output = BigNum;
    #[inline]
    fn neg(self) -> BigNum {
        BigNum(-&self.0)
    }
}

impl BigNum {
    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(&self, rhs: &BigNum) -> Option<BigNum> {
        self.0.checked_div(&rhs.0).map(BigNum)
    }

    /// Remainder that reports a zero divisor instead of panicking.
    pub fn checked_rem(&self, rhs: &BigNum) -> Option<BigNum> {
        if rhs.is_zero() {
            None
        } else {
            Some(BigNum(&self.0 % &rhs.0))
        }
    }
}
