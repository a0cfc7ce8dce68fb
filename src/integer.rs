/*
 * The integer value: one GMP mpz_t owned by a Rust handle
 */

use crate::error::DomainError;
use crate::traits::Assign;
use gmp_mpfr_sys::gmp::{self, bitcnt_t, limb_t, mpz_t};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::os::raw::c_ulong;
use std::slice;

/// An arbitrary-precision signed integer.
///
/// The sign lives in the signed limb count of the underlying `mpz_t`, the
/// magnitude in a heap buffer of limbs (least significant first) that the
/// value owns exclusively. Zero holds no significant limbs, and the top
/// significant limb of a non-zero value is never zero.
///
/// `Integer` is deliberately not `Copy`: `clone` deep-copies the limbs and a
/// move hands the buffer over.
#[repr(transparent)]
pub struct Integer {
    inner: mpz_t,
}

// The limb pointer is owned, never shared between handles.
unsafe impl Send for Integer {}
unsafe impl Sync for Integer {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

pub(crate) fn bitcnt<T>(bits: T) -> bitcnt_t
where
    T: Copy + std::fmt::Display,
    bitcnt_t: TryFrom<T>,
{
    match bitcnt_t::try_from(bits) {
        Ok(b) => b,
        Err(_) => panic!("bit count {} overflows the engine's bit counter", bits),
    }
}

impl Integer {
    /// Creates a zero value. No limb buffer is allocated until a non-zero
    /// value is stored.
    #[inline]
    pub fn new() -> Self {
        unsafe {
            let mut raw = MaybeUninit::uninit();
            gmp::mpz_init(raw.as_mut_ptr());
            Integer {
                inner: raw.assume_init(),
            }
        }
    }

    /// Creates a zero value with room for at least `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        unsafe {
            let mut raw = MaybeUninit::uninit();
            gmp::mpz_init2(raw.as_mut_ptr(), bitcnt(bits));
            Integer {
                inner: raw.assume_init(),
            }
        }
    }

    #[inline]
    pub(crate) fn as_raw(&self) -> *const mpz_t {
        &self.inner
    }

    #[inline]
    pub(crate) fn as_raw_mut(&mut self) -> *mut mpz_t {
        &mut self.inner
    }

    /// The significant limbs of the magnitude, least significant first.
    #[inline]
    pub fn as_limbs(&self) -> &[limb_t] {
        let used = self.used_limbs();
        unsafe { slice::from_raw_parts(self.inner.d.as_ptr(), used) }
    }

    /// Number of significant limbs.
    #[inline]
    pub fn used_limbs(&self) -> usize {
        self.inner.size.unsigned_abs() as usize
    }

    /// Allocated capacity in bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.alloc as usize * gmp::LIMB_BITS as usize
    }

    #[inline]
    pub(crate) fn allocated_limbs(&self) -> usize {
        self.inner.alloc as usize
    }

    #[inline]
    pub(crate) fn limbs_ptr(&mut self) -> *mut limb_t {
        self.inner.d.as_ptr()
    }

    /// Marks the value as zero without touching the buffer.
    #[inline]
    pub(crate) fn clear_size(&mut self) {
        self.inner.size = 0;
    }

    /// Grows the buffer so that `additional` more bits fit without
    /// reallocating.
    pub fn reserve(&mut self, additional: usize) {
        let needed = (self.bit_length() as usize)
            .checked_add(additional)
            .unwrap_or_else(|| panic!("capacity overflow"));
        if needed > self.capacity() {
            unsafe { gmp::mpz_realloc2(self.as_raw_mut(), bitcnt(needed)) };
        }
    }

    pub fn shrink_to_fit(&mut self) {
        let needed = self.bit_length() as usize;
        if needed < self.capacity() {
            // realloc2 keeps the value since the new size still holds it
            unsafe { gmp::mpz_realloc2(self.as_raw_mut(), bitcnt(needed)) };
        }
    }

    /// Moves the value out, leaving zero behind.
    #[inline]
    pub fn take(&mut self) -> Integer {
        mem::take(self)
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        match self.inner.size.cmp(&0) {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inner.size == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.inner.size < 0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.inner.size > 0
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.as_limbs().first().map_or(true, |low| low & 1 == 0)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Flips the sign. Only the stored limb count changes.
    #[inline]
    pub fn neg_mut(&mut self) {
        self.inner.size = -self.inner.size;
    }

    /// Clears the sign. Only the stored limb count changes.
    #[inline]
    pub fn abs_mut(&mut self) {
        self.inner.size = self.inner.size.abs();
    }

    #[inline]
    pub fn abs(mut self) -> Integer {
        self.abs_mut();
        self
    }

    /// Compares absolute values.
    #[inline]
    pub fn cmp_abs(&self, other: &Integer) -> Ordering {
        unsafe { gmp::mpz_cmpabs(self.as_raw(), other.as_raw()) }.cmp(&0)
    }

    /// Adds one in place.
    ///
    /// When the low limb absorbs the change without a carry or borrow only
    /// that limb is touched; otherwise the engine's single-limb add runs.
    pub fn increment(&mut self) {
        let size = self.inner.size;
        if size != 0 {
            let low = unsafe { &mut *self.inner.d.as_ptr() };
            if size > 0 && *low != limb_t::MAX {
                *low += 1;
                return;
            }
            if size < 0 && *low != 0 && (size < -1 || *low > 1) {
                *low -= 1;
                return;
            }
        }
        let raw = self.as_raw_mut();
        unsafe { gmp::mpz_add_ui(raw, raw, 1) };
    }

    /// Subtracts one in place, mirroring [`increment`](Integer::increment).
    pub fn decrement(&mut self) {
        let size = self.inner.size;
        if size != 0 {
            let low = unsafe { &mut *self.inner.d.as_ptr() };
            if size < 0 && *low != limb_t::MAX {
                *low += 1;
                return;
            }
            if size > 0 && *low != 0 && (size > 1 || *low > 1) {
                *low -= 1;
                return;
            }
        }
        let raw = self.as_raw_mut();
        unsafe { gmp::mpz_sub_ui(raw, raw, 1) };
    }

    /// Floored quotient and remainder computed by one engine call.
    ///
    /// The quotient rounds toward negative infinity, so the remainder is
    /// zero or carries the divisor's sign.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_mod(&self, divisor: &Integer) -> (Integer, Integer) {
        match self.checked_div_mod(divisor) {
            Ok(qr) => qr,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }

    pub fn checked_div_mod(&self, divisor: &Integer) -> Result<(Integer, Integer), DomainError> {
        if divisor.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        let mut q = Integer::new();
        let mut r = Integer::new();
        unsafe {
            gmp::mpz_fdiv_qr(
                q.as_raw_mut(),
                r.as_raw_mut(),
                self.as_raw(),
                divisor.as_raw(),
            )
        };
        Ok((q, r))
    }

    /// Floored quotient, same as `self / divisor`.
    pub fn div_floor(&self, divisor: &Integer) -> Integer {
        self / divisor
    }

    /// Floored remainder, same as `self % divisor`. Zero or the divisor's sign.
    pub fn mod_floor(&self, divisor: &Integer) -> Integer {
        self % divisor
    }

    /// Truncated quotient and remainder (remainder takes the dividend's sign).
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_rem_trunc(&self, divisor: &Integer) -> (Integer, Integer) {
        if divisor.is_zero() {
            panic!("attempt to divide by zero");
        }
        let mut q = Integer::new();
        let mut r = Integer::new();
        unsafe {
            gmp::mpz_tdiv_qr(
                q.as_raw_mut(),
                r.as_raw_mut(),
                self.as_raw(),
                divisor.as_raw(),
            )
        };
        (q, r)
    }

    /// `self += x * y` without materializing the product.
    #[inline]
    pub fn add_mul(&mut self, x: &Integer, y: &Integer) {
        unsafe { gmp::mpz_addmul(self.as_raw_mut(), x.as_raw(), y.as_raw()) };
    }

    /// `self -= x * y` without materializing the product.
    #[inline]
    pub fn sub_mul(&mut self, x: &Integer, y: &Integer) {
        unsafe { gmp::mpz_submul(self.as_raw_mut(), x.as_raw(), y.as_raw()) };
    }

    /// `self += x * y` for a native multiplier. A negative `y` turns into a
    /// fused subtraction of `x * |y|`.
    pub fn add_mul_small(&mut self, x: &Integer, y: i64) {
        let magnitude = y.unsigned_abs();
        match (c_ulong::try_from(magnitude).ok(), y < 0) {
            (Some(m), false) => unsafe { gmp::mpz_addmul_ui(self.as_raw_mut(), x.as_raw(), m) },
            (Some(m), true) => unsafe { gmp::mpz_submul_ui(self.as_raw_mut(), x.as_raw(), m) },
            (None, _) => self.add_mul(x, &Integer::from(y)),
        }
    }

    /// `self -= x * y` for a native multiplier.
    pub fn sub_mul_small(&mut self, x: &Integer, y: i64) {
        let magnitude = y.unsigned_abs();
        match (c_ulong::try_from(magnitude).ok(), y < 0) {
            (Some(m), false) => unsafe { gmp::mpz_submul_ui(self.as_raw_mut(), x.as_raw(), m) },
            (Some(m), true) => unsafe { gmp::mpz_addmul_ui(self.as_raw_mut(), x.as_raw(), m) },
            (None, _) => self.sub_mul(x, &Integer::from(y)),
        }
    }

    pub fn pow(&self, exp: u32) -> Integer {
        let mut out = Integer::new();
        unsafe { gmp::mpz_pow_ui(out.as_raw_mut(), self.as_raw(), exp.into()) };
        out
    }

    /// Like [`pow`](Integer::pow) but accepts a signed exponent, rejecting
    /// negative ones.
    pub fn checked_pow(&self, exp: i32) -> Result<Integer, DomainError> {
        match u32::try_from(exp) {
            Ok(e) => Ok(self.pow(e)),
            Err(_) => Err(DomainError::NegativeExponent),
        }
    }

    /// `base ^ exp` for a native base without promoting it first.
    pub fn small_pow(base: i64, exp: u32) -> Integer {
        let mut out = Integer::new();
        match c_ulong::try_from(base.unsigned_abs()).ok() {
            Some(b) => unsafe { gmp::mpz_ui_pow_ui(out.as_raw_mut(), b, exp.into()) },
            None => return Integer::from(base).pow(exp),
        }
        if base < 0 && exp % 2 == 1 {
            out.neg_mut();
        }
        out
    }

    /// Squares in place; the engine reads and writes the same limbs.
    pub fn square_mut(&mut self) {
        let raw = self.as_raw_mut();
        unsafe { gmp::mpz_mul(raw, raw, raw) };
    }

    pub fn square(mut self) -> Integer {
        self.square_mut();
        self
    }
}

impl Default for Integer {
    #[inline]
    fn default() -> Self {
        Integer::new()
    }
}

impl Clone for Integer {
    fn clone(&self) -> Self {
        unsafe {
            let mut raw = MaybeUninit::uninit();
            gmp::mpz_init_set(raw.as_mut_ptr(), self.as_raw());
            Integer {
                inner: raw.assume_init(),
            }
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl Drop for Integer {
    fn drop(&mut self) {
        unsafe { gmp::mpz_clear(self.as_raw_mut()) };
    }
}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.size.signum().hash(state);
        self.as_limbs().hash(state);
    }
}

impl Assign<&Integer> for Integer {
    #[inline]
    fn assign(&mut self, src: &Integer) {
        unsafe { gmp::mpz_set(self.as_raw_mut(), src.as_raw()) };
    }
}

impl Assign for Integer {
    #[inline]
    fn assign(&mut self, src: Integer) {
        // the old buffer is released when `src` drops
        let mut src = src;
        mem::swap(self, &mut src);
    }
}
