use crate::integer::Integer;
use crate::traits::MagnitudeOrd;
use gmp_mpfr_sys::gmp;
use std::cmp::Ordering;
use std::os::raw::{c_long, c_ulong};

impl PartialEq for Integer {
    #[inline]
    fn eq(&self, other: &Integer) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    #[inline]
    fn cmp(&self, other: &Integer) -> Ordering {
        unsafe { gmp::mpz_cmp(self.as_raw(), other.as_raw()) }.cmp(&0)
    }
}

impl MagnitudeOrd for Integer {
    #[inline]
    fn cmp_magnitude(&self, other: &Integer) -> Ordering {
        self.cmp_abs(other)
    }
}

fn cmp_u(big: &Integer, small: u64) -> Ordering {
    match c_ulong::try_from(small).ok() {
        Some(s) => unsafe { gmp::mpz_cmp_ui(big.as_raw(), s) }.cmp(&0),
        None => big.cmp(&Integer::from(small)),
    }
}

fn cmp_i(big: &Integer, small: i64) -> Ordering {
    match c_long::try_from(small).ok() {
        Some(s) => unsafe { gmp::mpz_cmp_si(big.as_raw(), s) }.cmp(&0),
        None => big.cmp(&Integer::from(small)),
    }
}

fn cmp_abs_u(big: &Integer, small: u64) -> Ordering {
    match c_ulong::try_from(small).ok() {
        Some(s) => unsafe { gmp::mpz_cmpabs_ui(big.as_raw(), s) }.cmp(&0),
        None => big.cmp_abs(&Integer::from(small)),
    }
}

fn cmp_abs_i(big: &Integer, small: i64) -> Ordering {
    cmp_abs_u(big, small.unsigned_abs())
}

fn cmp_wide<T>(big: &Integer, small: T) -> Ordering
where
    Integer: From<T>,
{
    big.cmp(&Integer::from(small))
}

fn cmp_abs_wide<T>(big: &Integer, small: T) -> Ordering
where
    Integer: From<T>,
{
    big.cmp_abs(&Integer::from(small))
}

macro_rules! cmp_native {
    ($($t:ty => $norm:ty, $cmp:ident, $cmp_abs:ident;)*) => {$(
        impl PartialEq<$t> for Integer {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                $cmp(self, *other as $norm) == Ordering::Equal
            }
        }

        impl PartialEq<Integer> for $t {
            #[inline]
            fn eq(&self, other: &Integer) -> bool {
                $cmp(other, *self as $norm) == Ordering::Equal
            }
        }

        impl PartialOrd<$t> for Integer {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some($cmp(self, *other as $norm))
            }
        }

        impl PartialOrd<Integer> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
                Some($cmp(other, *self as $norm).reverse())
            }
        }

        impl MagnitudeOrd<$t> for Integer {
            #[inline]
            fn cmp_magnitude(&self, other: &$t) -> Ordering {
                $cmp_abs(self, *other as $norm)
            }
        }
    )*};
}

cmp_native! {
    u8 => u64, cmp_u, cmp_abs_u;
    u16 => u64, cmp_u, cmp_abs_u;
    u32 => u64, cmp_u, cmp_abs_u;
    u64 => u64, cmp_u, cmp_abs_u;
    usize => u64, cmp_u, cmp_abs_u;
    i8 => i64, cmp_i, cmp_abs_i;
    i16 => i64, cmp_i, cmp_abs_i;
    i32 => i64, cmp_i, cmp_abs_i;
    i64 => i64, cmp_i, cmp_abs_i;
    isize => i64, cmp_i, cmp_abs_i;
    u128 => u128, cmp_wide, cmp_abs_wide;
    i128 => i128, cmp_wide, cmp_abs_wide;
}
