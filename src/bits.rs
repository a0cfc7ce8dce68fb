/*
 * Bit view: the value read as an infinite two's-complement bit string.
 *
 * Only the magnitude is stored; bits above the top limb come from the sign
 * (all zero for non-negative values, all one for negative ones) and are
 * never materialized.
 */

use crate::error::DomainError;
use crate::integer::{bitcnt, Integer};
use gmp_mpfr_sys::gmp::{self, bitcnt_t};
use std::iter::FusedIterator;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

fn scan_result(found: bitcnt_t) -> Option<u64> {
    if found == bitcnt_t::MAX {
        None
    } else {
        Some(u64::from(found))
    }
}

impl Integer {
    /// Bit `index` of the two's-complement expansion.
    #[inline]
    pub fn bit(&self, index: u32) -> bool {
        unsafe { gmp::mpz_tstbit(self.as_raw(), index.into()) != 0 }
    }

    /// Sets bit `index` to `on`, growing the buffer as needed.
    #[inline]
    pub fn set_bit(&mut self, index: u32, on: bool) -> &mut Self {
        unsafe {
            if on {
                gmp::mpz_setbit(self.as_raw_mut(), index.into());
            } else {
                gmp::mpz_clrbit(self.as_raw_mut(), index.into());
            }
        }
        self
    }

    #[inline]
    pub fn toggle_bit(&mut self, index: u32) -> &mut Self {
        unsafe { gmp::mpz_combit(self.as_raw_mut(), index.into()) };
        self
    }

    /// Bits needed for the magnitude; 0 for zero.
    #[inline]
    pub fn bit_length(&self) -> u64 {
        if self.is_zero() {
            0
        } else {
            unsafe { gmp::mpz_sizeinbase(self.as_raw(), 2) as u64 }
        }
    }

    /// Number of one bits in the magnitude. The sign is ignored.
    pub fn count_ones(&self) -> u64 {
        self.as_limbs()
            .iter()
            .map(|limb| u64::from(limb.count_ones()))
            .sum()
    }

    /// Index of the first one bit at or above `start`.
    ///
    /// `None` once a non-negative value has no more one bits.
    #[inline]
    pub fn find_one(&self, start: u64) -> Option<u64> {
        scan_result(unsafe { gmp::mpz_scan1(self.as_raw(), bitcnt(start)) })
    }

    /// Index of the first zero bit at or above `start`.
    ///
    /// `None` once a negative value has no more zero bits.
    #[inline]
    pub fn find_zero(&self, start: u64) -> Option<u64> {
        scan_result(unsafe { gmp::mpz_scan0(self.as_raw(), bitcnt(start)) })
    }

    /// `None` for zero, which has no lowest one bit.
    #[inline]
    pub fn trailing_zeros(&self) -> Option<u64> {
        self.find_one(0)
    }

    /// Indices of the one bits, least significant first.
    ///
    /// A negative value has infinitely many one bits in its two's-complement
    /// expansion and is rejected instead of yielding an endless sequence.
    pub fn ones(&self) -> Result<Ones<'_>, DomainError> {
        if self.is_negative() {
            return Err(DomainError::UnboundedBits);
        }
        Ok(Ones {
            value: self,
            next: Some(0),
        })
    }

    /// Keeps the low `n` bits of the two's-complement expansion; the result
    /// is never negative.
    pub fn keep_bits(&self, n: u32) -> Integer {
        let mut out = Integer::new();
        unsafe { gmp::mpz_fdiv_r_2exp(out.as_raw_mut(), self.as_raw(), n.into()) };
        out
    }

    pub fn keep_bits_mut(&mut self, n: u32) {
        let raw = self.as_raw_mut();
        unsafe { gmp::mpz_fdiv_r_2exp(raw, raw, n.into()) };
    }
}

/// Lazy iterator over set-bit indices of a non-negative [`Integer`].
///
/// A clone continues from the same position; [`Integer::ones`] starts over.
#[derive(Clone, Debug)]
pub struct Ones<'a> {
    value: &'a Integer,
    next: Option<u64>,
}

impl Iterator for Ones<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let found = self.value.find_one(self.next?);
        self.next = found.and_then(|i| i.checked_add(1));
        found
    }
}

impl FusedIterator for Ones<'_> {}

arith_big! { BitAnd bitand, BitAndAssign bitand_assign, gmp::mpz_and }
arith_big! { BitOr bitor, BitOrAssign bitor_assign, gmp::mpz_ior }
arith_big! { BitXor bitxor, BitXorAssign bitxor_assign, gmp::mpz_xor }

// Masking with a non-negative native reads only the low word, so the result
// is computed natively from the two's-complement low bits.
macro_rules! and_unsigned {
    ($($t:ty)*) => {$(
        impl BitAnd<$t> for &Integer {
            type Output = Integer;
            #[inline]
            fn bitand(self, rhs: $t) -> Integer {
                Integer::from(self.to_u64_wrapping() & rhs as u64)
            }
        }

        impl BitAnd<$t> for Integer {
            type Output = Integer;
            #[inline]
            fn bitand(mut self, rhs: $t) -> Integer {
                self &= rhs;
                self
            }
        }

        impl BitAndAssign<$t> for Integer {
            #[inline]
            fn bitand_assign(&mut self, rhs: $t) {
                let low = self.to_u64_wrapping() & rhs as u64;
                crate::traits::Assign::assign(self, low);
            }
        }

        impl BitAnd<Integer> for $t {
            type Output = Integer;
            #[inline]
            fn bitand(self, rhs: Integer) -> Integer {
                rhs & self
            }
        }

        impl BitAnd<&Integer> for $t {
            type Output = Integer;
            #[inline]
            fn bitand(self, rhs: &Integer) -> Integer {
                rhs & self
            }
        }
    )*};
}

and_unsigned! { u8 u16 u32 u64 usize }

macro_rules! bit_promote {
    ($($t:ty)*) => {$(
        arith_promote! { $t; BitOr bitor, BitOrAssign bitor_assign }
        arith_promote! { $t; BitXor bitxor, BitXorAssign bitxor_assign }
    )*};
}

bit_promote! { u8 u16 u32 u64 usize u128 i8 i16 i32 i64 isize i128 }

macro_rules! and_promote {
    ($($t:ty)*) => {$(
        arith_promote! { $t; BitAnd bitand, BitAndAssign bitand_assign }
    )*};
}

and_promote! { u128 i8 i16 i32 i64 isize i128 }

impl Not for Integer {
    type Output = Integer;
    #[inline]
    fn not(mut self) -> Integer {
        let raw = self.as_raw_mut();
        unsafe { gmp::mpz_com(raw, raw) };
        self
    }
}

impl Not for &Integer {
    type Output = Integer;
    #[inline]
    fn not(self) -> Integer {
        let mut out = Integer::new();
        unsafe { gmp::mpz_com(out.as_raw_mut(), self.as_raw()) };
        out
    }
}

macro_rules! shifts {
    ($($t:ty)*) => {$(
        impl Shl<$t> for Integer {
            type Output = Integer;
            #[inline]
            fn shl(mut self, rhs: $t) -> Integer {
                self <<= rhs;
                self
            }
        }

        impl Shl<$t> for &Integer {
            type Output = Integer;
            #[inline]
            fn shl(self, rhs: $t) -> Integer {
                let mut out = Integer::new();
                unsafe { gmp::mpz_mul_2exp(out.as_raw_mut(), self.as_raw(), bitcnt(rhs)) };
                out
            }
        }

        impl ShlAssign<$t> for Integer {
            #[inline]
            fn shl_assign(&mut self, rhs: $t) {
                let raw = self.as_raw_mut();
                unsafe { gmp::mpz_mul_2exp(raw, raw, bitcnt(rhs)) };
            }
        }

        // floor division by a power of two is the arithmetic shift
        impl Shr<$t> for Integer {
            type Output = Integer;
            #[inline]
            fn shr(mut self, rhs: $t) -> Integer {
                self >>= rhs;
                self
            }
        }

        impl Shr<$t> for &Integer {
            type Output = Integer;
            #[inline]
            fn shr(self, rhs: $t) -> Integer {
                let mut out = Integer::new();
                unsafe { gmp::mpz_fdiv_q_2exp(out.as_raw_mut(), self.as_raw(), bitcnt(rhs)) };
                out
            }
        }

        impl ShrAssign<$t> for Integer {
            #[inline]
            fn shr_assign(&mut self, rhs: $t) {
                let raw = self.as_raw_mut();
                unsafe { gmp::mpz_fdiv_q_2exp(raw, raw, bitcnt(rhs)) };
            }
        }
    )*};
}

shifts! { u8 u16 u32 u64 usize }
