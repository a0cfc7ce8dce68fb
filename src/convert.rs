//! Conversions between [`Integer`] and the native integer types.
//!
//! Native to big always succeeds. Big to native comes in a strict form that
//! reports [`RangeError`] and a lenient form that falls back to a
//! caller-supplied default; the value is never truncated silently.

use crate::error::RangeError;
use crate::integer::Integer;
use crate::traits::Assign;
use gmp_mpfr_sys::gmp;
use std::os::raw::{c_long, c_ulong};

mod sealed {
    pub trait Sealed {}
}

/// A native integer type that an [`Integer`] can be converted into.
pub trait NativeInt: Copy + sealed::Sealed {
    #[doc(hidden)]
    const NAME: &'static str;

    #[doc(hidden)]
    fn from_parts(negative: bool, magnitude: u128) -> Option<Self>;
}

macro_rules! native_unsigned {
    ($($t:ty)*) => {$(
        impl sealed::Sealed for $t {}

        impl NativeInt for $t {
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn from_parts(negative: bool, magnitude: u128) -> Option<Self> {
                if negative {
                    return None;
                }
                <$t>::try_from(magnitude).ok()
            }
        }

        impl Assign<$t> for Integer {
            #[inline]
            fn assign(&mut self, src: $t) {
                match c_ulong::try_from(src).ok() {
                    Some(small) => unsafe { gmp::mpz_set_ui(self.as_raw_mut(), small) },
                    None => self.assign_parts(false, src as u128),
                }
            }
        }
    )*};
}

macro_rules! native_signed {
    ($($t:ty)*) => {$(
        impl sealed::Sealed for $t {}

        impl NativeInt for $t {
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn from_parts(negative: bool, magnitude: u128) -> Option<Self> {
                if !negative {
                    return <$t>::try_from(magnitude).ok();
                }
                // magnitude >= 1 here, so -(m - 1) - 1 reaches MIN without overflow
                let below = i128::try_from(magnitude - 1).ok()?;
                <$t>::try_from(-below - 1).ok()
            }
        }

        impl Assign<$t> for Integer {
            #[inline]
            fn assign(&mut self, src: $t) {
                match c_long::try_from(src).ok() {
                    Some(small) => unsafe { gmp::mpz_set_si(self.as_raw_mut(), small) },
                    None => self.assign_parts(src < 0, src.unsigned_abs() as u128),
                }
            }
        }
    )*};
}

native_unsigned! { u8 u16 u32 u64 u128 usize }
native_signed! { i8 i16 i32 i64 i128 isize }

macro_rules! from_native {
    ($($t:ty)*) => {$(
        impl From<$t> for Integer {
            #[inline]
            fn from(val: $t) -> Self {
                let mut i = Integer::new();
                i.assign(val);
                i
            }
        }

        impl TryFrom<&Integer> for $t {
            type Error = RangeError;

            #[inline]
            fn try_from(value: &Integer) -> Result<Self, RangeError> {
                value.to_native()
            }
        }

        impl TryFrom<Integer> for $t {
            type Error = RangeError;

            #[inline]
            fn try_from(value: Integer) -> Result<Self, RangeError> {
                value.to_native()
            }
        }
    )*};
}

from_native! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

impl Integer {
    /// Stores a sign and a magnitude of up to 128 bits.
    pub(crate) fn assign_parts(&mut self, negative: bool, magnitude: u128) {
        match c_ulong::try_from(magnitude).ok() {
            Some(small) => unsafe { gmp::mpz_set_ui(self.as_raw_mut(), small) },
            None => {
                let words = [magnitude as u64, (magnitude >> 64) as u64];
                unsafe {
                    gmp::mpz_import(
                        self.as_raw_mut(),
                        words.len(),
                        -1,
                        8,
                        0,
                        0,
                        words.as_ptr().cast(),
                    )
                };
            }
        }
        if negative {
            self.neg_mut();
        }
    }

    /// The magnitude, if it fits in 128 bits.
    fn magnitude_u128(&self) -> Option<u128> {
        if self.bit_length() > 128 {
            return None;
        }
        let limb_bits = gmp::LIMB_BITS as u32;
        let magnitude = self
            .as_limbs()
            .iter()
            .enumerate()
            .fold(0u128, |acc, (i, &limb)| acc | (u128::from(limb) << (i as u32 * limb_bits)));
        Some(magnitude)
    }

    /// Strict conversion: fails with [`RangeError`] when the value does not
    /// fit `T`.
    pub fn to_native<T: NativeInt>(&self) -> Result<T, RangeError> {
        self.magnitude_u128()
            .and_then(|m| T::from_parts(self.is_negative(), m))
            .ok_or(RangeError { target: T::NAME })
    }

    /// Lenient conversion: returns `default` when the value does not fit `T`.
    pub fn to_native_or<T: NativeInt>(&self, default: T) -> T {
        self.to_native().unwrap_or(default)
    }

    /// The low 64 bits of the two's-complement expansion.
    pub fn to_u64_wrapping(&self) -> u64 {
        let limb_bits = gmp::LIMB_BITS as u32;
        let low = self
            .as_limbs()
            .iter()
            .take(64 / limb_bits as usize)
            .enumerate()
            .fold(0u64, |acc, (i, &limb)| acc | (u64::from(limb) << (i as u32 * limb_bits)));
        if self.is_negative() {
            low.wrapping_neg()
        } else {
            low
        }
    }

    #[inline]
    pub fn to_i64_wrapping(&self) -> i64 {
        self.to_u64_wrapping() as i64
    }
}
