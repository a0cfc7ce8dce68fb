/*
 * Operator dispatch: every arithmetic operator takes an Integer, a borrowed
 * Integer or a native integer on either side. The impl picked by the compiler
 * decides which engine routine runs:
 *
 *   big op big        direct mpz call, reusing an owned operand's limbs
 *   big op unsigned   single-limb *_ui routine, no temporary Integer
 *   big op signed     sign split before the call, unsigned routine on |i|
 *   big op 128-bit    promotion, the engine has no two-limb routines
 *   native op native  plain native arithmetic, never promoted
 */

use crate::integer::Integer;
use gmp_mpfr_sys::gmp::{self, mpz_t};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::os::raw::c_ulong;

/// Implements `$Imp` for all four owned/borrowed operand pairs plus the
/// assign form, calling `$func(dst, lhs, rhs)`. The engine accepts `dst`
/// equal to either source, so owned operands donate their buffer.
macro_rules! arith_big {
    ($Imp:ident $method:ident, $ImpAssign:ident $method_assign:ident, $func:path) => {
        impl $Imp<&$crate::Integer> for $crate::Integer {
            type Output = $crate::Integer;
            #[inline]
            fn $method(mut self, rhs: &$crate::Integer) -> $crate::Integer {
                let raw = self.as_raw_mut();
                unsafe { $func(raw, raw, rhs.as_raw()) };
                self
            }
        }

        impl $Imp<$crate::Integer> for $crate::Integer {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, rhs: $crate::Integer) -> $crate::Integer {
                <$crate::Integer as $Imp<&$crate::Integer>>::$method(self, &rhs)
            }
        }

        impl $Imp<$crate::Integer> for &$crate::Integer {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, mut rhs: $crate::Integer) -> $crate::Integer {
                let raw = rhs.as_raw_mut();
                unsafe { $func(raw, self.as_raw(), raw) };
                rhs
            }
        }

        impl $Imp<&$crate::Integer> for &$crate::Integer {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, rhs: &$crate::Integer) -> $crate::Integer {
                let mut out = $crate::Integer::new();
                unsafe { $func(out.as_raw_mut(), self.as_raw(), rhs.as_raw()) };
                out
            }
        }

        impl $ImpAssign<&$crate::Integer> for $crate::Integer {
            #[inline]
            fn $method_assign(&mut self, rhs: &$crate::Integer) {
                let raw = self.as_raw_mut();
                unsafe { $func(raw, raw, rhs.as_raw()) };
            }
        }

        impl $ImpAssign<$crate::Integer> for $crate::Integer {
            #[inline]
            fn $method_assign(&mut self, rhs: $crate::Integer) {
                <$crate::Integer as $ImpAssign<&$crate::Integer>>::$method_assign(self, &rhs);
            }
        }
    };
}

/// Implements `$Imp` between `Integer` and one native type. The native side
/// is widened losslessly to `$Norm` and handed to `$fwd(dst, big, small)`
/// for `big op small` and `$rev(dst, small, big)` for `small op big`.
macro_rules! arith_small {
    ($Small:ty as $Norm:ty;
     $Imp:ident $method:ident, $ImpAssign:ident $method_assign:ident, $fwd:path, $rev:path) => {
        impl $Imp<$Small> for $crate::Integer {
            type Output = $crate::Integer;
            #[inline]
            fn $method(mut self, rhs: $Small) -> $crate::Integer {
                let raw = self.as_raw_mut();
                unsafe { $fwd(raw, raw, rhs as $Norm) };
                self
            }
        }

        impl $Imp<$Small> for &$crate::Integer {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, rhs: $Small) -> $crate::Integer {
                let mut out = $crate::Integer::new();
                unsafe { $fwd(out.as_raw_mut(), self.as_raw(), rhs as $Norm) };
                out
            }
        }

        impl $ImpAssign<$Small> for $crate::Integer {
            #[inline]
            fn $method_assign(&mut self, rhs: $Small) {
                let raw = self.as_raw_mut();
                unsafe { $fwd(raw, raw, rhs as $Norm) };
            }
        }

        impl $Imp<$crate::Integer> for $Small {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, mut rhs: $crate::Integer) -> $crate::Integer {
                let raw = rhs.as_raw_mut();
                unsafe { $rev(raw, self as $Norm, raw) };
                rhs
            }
        }

        impl $Imp<&$crate::Integer> for $Small {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, rhs: &$crate::Integer) -> $crate::Integer {
                let mut out = $crate::Integer::new();
                unsafe { $rev(out.as_raw_mut(), self as $Norm, rhs.as_raw()) };
                out
            }
        }
    };
}

/// Implements `$Imp` between `Integer` and a native type by promoting the
/// native operand and deferring to the big op big impls.
macro_rules! arith_promote {
    ($Small:ty; $Imp:ident $method:ident, $ImpAssign:ident $method_assign:ident) => {
        impl $Imp<$Small> for $crate::Integer {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, rhs: $Small) -> $crate::Integer {
                <$crate::Integer as $Imp<$crate::Integer>>::$method(self, $crate::Integer::from(rhs))
            }
        }

        impl $Imp<$Small> for &$crate::Integer {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, rhs: $Small) -> $crate::Integer {
                <&$crate::Integer as $Imp<$crate::Integer>>::$method(self, $crate::Integer::from(rhs))
            }
        }

        impl $ImpAssign<$Small> for $crate::Integer {
            #[inline]
            fn $method_assign(&mut self, rhs: $Small) {
                <$crate::Integer as $ImpAssign<$crate::Integer>>::$method_assign(
                    self,
                    $crate::Integer::from(rhs),
                );
            }
        }

        impl $Imp<$crate::Integer> for $Small {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, rhs: $crate::Integer) -> $crate::Integer {
                <$crate::Integer as $Imp<$crate::Integer>>::$method($crate::Integer::from(self), rhs)
            }
        }

        impl $Imp<&$crate::Integer> for $Small {
            type Output = $crate::Integer;
            #[inline]
            fn $method(self, rhs: &$crate::Integer) -> $crate::Integer {
                <$crate::Integer as $Imp<&$crate::Integer>>::$method($crate::Integer::from(self), rhs)
            }
        }
    };
}

#[inline]
fn check_divisor(d: *const mpz_t) {
    if unsafe { (*d).size } == 0 {
        panic!("attempt to divide by zero");
    }
}

unsafe fn fdiv_q(q: *mut mpz_t, n: *const mpz_t, d: *const mpz_t) {
    check_divisor(d);
    gmp::mpz_fdiv_q(q, n, d);
}

unsafe fn fdiv_r(r: *mut mpz_t, n: *const mpz_t, d: *const mpz_t) {
    check_divisor(d);
    gmp::mpz_fdiv_r(r, n, d);
}

arith_big! { Add add, AddAssign add_assign, gmp::mpz_add }
arith_big! { Sub sub, SubAssign sub_assign, gmp::mpz_sub }
arith_big! { Mul mul, MulAssign mul_assign, gmp::mpz_mul }
arith_big! { Div div, DivAssign div_assign, fdiv_q }
arith_big! { Rem rem, RemAssign rem_assign, fdiv_r }

// big op unsigned

unsafe fn add_u(dst: *mut mpz_t, lhs: *const mpz_t, rhs: u64) {
    match c_ulong::try_from(rhs).ok() {
        Some(small) => gmp::mpz_add_ui(dst, lhs, small),
        None => gmp::mpz_add(dst, lhs, Integer::from(rhs).as_raw()),
    }
}

unsafe fn sub_u(dst: *mut mpz_t, lhs: *const mpz_t, rhs: u64) {
    match c_ulong::try_from(rhs).ok() {
        Some(small) => gmp::mpz_sub_ui(dst, lhs, small),
        None => gmp::mpz_sub(dst, lhs, Integer::from(rhs).as_raw()),
    }
}

unsafe fn mul_u(dst: *mut mpz_t, lhs: *const mpz_t, rhs: u64) {
    match c_ulong::try_from(rhs).ok() {
        Some(small) => gmp::mpz_mul_ui(dst, lhs, small),
        None => gmp::mpz_mul(dst, lhs, Integer::from(rhs).as_raw()),
    }
}

unsafe fn div_u(dst: *mut mpz_t, lhs: *const mpz_t, rhs: u64) {
    if rhs == 0 {
        panic!("attempt to divide by zero");
    }
    match c_ulong::try_from(rhs).ok() {
        Some(small) => {
            gmp::mpz_fdiv_q_ui(dst, lhs, small);
        }
        None => gmp::mpz_fdiv_q(dst, lhs, Integer::from(rhs).as_raw()),
    }
}

unsafe fn rem_u(dst: *mut mpz_t, lhs: *const mpz_t, rhs: u64) {
    if rhs == 0 {
        panic!("attempt to divide by zero");
    }
    match c_ulong::try_from(rhs).ok() {
        Some(small) => {
            gmp::mpz_fdiv_r_ui(dst, lhs, small);
        }
        None => gmp::mpz_fdiv_r(dst, lhs, Integer::from(rhs).as_raw()),
    }
}

// unsigned op big

unsafe fn u_add(dst: *mut mpz_t, lhs: u64, rhs: *const mpz_t) {
    add_u(dst, rhs, lhs);
}

unsafe fn u_sub(dst: *mut mpz_t, lhs: u64, rhs: *const mpz_t) {
    match c_ulong::try_from(lhs).ok() {
        Some(small) => gmp::mpz_ui_sub(dst, small, rhs),
        None => gmp::mpz_sub(dst, Integer::from(lhs).as_raw(), rhs),
    }
}

unsafe fn u_mul(dst: *mut mpz_t, lhs: u64, rhs: *const mpz_t) {
    mul_u(dst, rhs, lhs);
}

unsafe fn u_div(dst: *mut mpz_t, lhs: u64, rhs: *const mpz_t) {
    fdiv_q(dst, Integer::from(lhs).as_raw(), rhs);
}

unsafe fn u_rem(dst: *mut mpz_t, lhs: u64, rhs: *const mpz_t) {
    fdiv_r(dst, Integer::from(lhs).as_raw(), rhs);
}

// big op signed: negative operands flip to the opposite unsigned routine

unsafe fn add_i(dst: *mut mpz_t, lhs: *const mpz_t, rhs: i64) {
    if rhs < 0 {
        sub_u(dst, lhs, rhs.unsigned_abs());
    } else {
        add_u(dst, lhs, rhs as u64);
    }
}

unsafe fn sub_i(dst: *mut mpz_t, lhs: *const mpz_t, rhs: i64) {
    if rhs < 0 {
        add_u(dst, lhs, rhs.unsigned_abs());
    } else {
        sub_u(dst, lhs, rhs as u64);
    }
}

unsafe fn mul_i(dst: *mut mpz_t, lhs: *const mpz_t, rhs: i64) {
    mul_u(dst, lhs, rhs.unsigned_abs());
    if rhs < 0 {
        gmp::mpz_neg(dst, dst);
    }
}

// floor(x / -d) == -ceil(x / d)
unsafe fn div_i(dst: *mut mpz_t, lhs: *const mpz_t, rhs: i64) {
    if rhs >= 0 {
        return div_u(dst, lhs, rhs as u64);
    }
    match c_ulong::try_from(rhs.unsigned_abs()).ok() {
        Some(small) => {
            gmp::mpz_cdiv_q_ui(dst, lhs, small);
            gmp::mpz_neg(dst, dst);
        }
        None => gmp::mpz_fdiv_q(dst, lhs, Integer::from(rhs).as_raw()),
    }
}

// x mod -d is the ceiling remainder of x / d, which is never positive
unsafe fn rem_i(dst: *mut mpz_t, lhs: *const mpz_t, rhs: i64) {
    if rhs >= 0 {
        return rem_u(dst, lhs, rhs as u64);
    }
    match c_ulong::try_from(rhs.unsigned_abs()).ok() {
        Some(small) => {
            gmp::mpz_cdiv_r_ui(dst, lhs, small);
        }
        None => gmp::mpz_fdiv_r(dst, lhs, Integer::from(rhs).as_raw()),
    }
}

// signed op big

unsafe fn i_add(dst: *mut mpz_t, lhs: i64, rhs: *const mpz_t) {
    add_i(dst, rhs, lhs);
}

// i - x == -(x + |i|) for negative i
unsafe fn i_sub(dst: *mut mpz_t, lhs: i64, rhs: *const mpz_t) {
    if lhs < 0 {
        add_u(dst, rhs, lhs.unsigned_abs());
        gmp::mpz_neg(dst, dst);
    } else {
        u_sub(dst, lhs as u64, rhs);
    }
}

unsafe fn i_mul(dst: *mut mpz_t, lhs: i64, rhs: *const mpz_t) {
    mul_i(dst, rhs, lhs);
}

unsafe fn i_div(dst: *mut mpz_t, lhs: i64, rhs: *const mpz_t) {
    fdiv_q(dst, Integer::from(lhs).as_raw(), rhs);
}

unsafe fn i_rem(dst: *mut mpz_t, lhs: i64, rhs: *const mpz_t) {
    fdiv_r(dst, Integer::from(lhs).as_raw(), rhs);
}

macro_rules! arith_unsigned {
    ($($t:ty)*) => {$(
        arith_small! { $t as u64; Add add, AddAssign add_assign, add_u, u_add }
        arith_small! { $t as u64; Sub sub, SubAssign sub_assign, sub_u, u_sub }
        arith_small! { $t as u64; Mul mul, MulAssign mul_assign, mul_u, u_mul }
        arith_small! { $t as u64; Div div, DivAssign div_assign, div_u, u_div }
        arith_small! { $t as u64; Rem rem, RemAssign rem_assign, rem_u, u_rem }
    )*};
}

macro_rules! arith_signed {
    ($($t:ty)*) => {$(
        arith_small! { $t as i64; Add add, AddAssign add_assign, add_i, i_add }
        arith_small! { $t as i64; Sub sub, SubAssign sub_assign, sub_i, i_sub }
        arith_small! { $t as i64; Mul mul, MulAssign mul_assign, mul_i, i_mul }
        arith_small! { $t as i64; Div div, DivAssign div_assign, div_i, i_div }
        arith_small! { $t as i64; Rem rem, RemAssign rem_assign, rem_i, i_rem }
    )*};
}

macro_rules! arith_wide {
    ($($t:ty)*) => {$(
        arith_promote! { $t; Add add, AddAssign add_assign }
        arith_promote! { $t; Sub sub, SubAssign sub_assign }
        arith_promote! { $t; Mul mul, MulAssign mul_assign }
        arith_promote! { $t; Div div, DivAssign div_assign }
        arith_promote! { $t; Rem rem, RemAssign rem_assign }
    )*};
}

arith_unsigned! { u8 u16 u32 u64 usize }
arith_signed! { i8 i16 i32 i64 isize }
arith_wide! { u128 i128 }

impl Neg for Integer {
    type Output = Integer;
    #[inline]
    fn neg(mut self) -> Integer {
        self.neg_mut();
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;
    #[inline]
    fn neg(self) -> Integer {
        let mut out = self.clone();
        out.neg_mut();
        out
    }
}

impl Sum for Integer {
    fn sum<I: Iterator<Item = Integer>>(iter: I) -> Integer {
        iter.fold(Integer::new(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Integer> for Integer {
    fn sum<I: Iterator<Item = &'a Integer>>(iter: I) -> Integer {
        iter.fold(Integer::new(), |acc, x| acc + x)
    }
}

impl Product for Integer {
    fn product<I: Iterator<Item = Integer>>(iter: I) -> Integer {
        iter.fold(Integer::from(1), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Integer> for Integer {
    fn product<I: Iterator<Item = &'a Integer>>(iter: I) -> Integer {
        iter.fold(Integer::from(1), |acc, x| acc * x)
    }
}
