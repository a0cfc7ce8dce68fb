//! Number-theoretic helpers. Inputs outside a function's domain are rejected
//! with [`DomainError`] before the engine sees them.

use crate::error::DomainError;
use crate::integer::Integer;
use gmp_mpfr_sys::gmp;
use std::os::raw::{c_int, c_ulong};
use tracing::{debug, trace};

/// Miller-Rabin rounds used by the prime searches of this crate.
pub const DEFAULT_PRIMALITY_REPS: u32 = 25;

/// Outcome of a probabilistic primality test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IsPrime {
    No,
    Probably,
    Yes,
}

fn small_arg(n: i32, op: &'static str) -> Result<c_ulong, DomainError> {
    match u32::try_from(n) {
        Ok(n) => Ok(n.into()),
        Err(_) => Err(DomainError::NegativeArgument(op)),
    }
}

macro_rules! sequence_fn {
    ($($(#[$attr:meta])* $name:ident => $func:path;)*) => {$(
        $(#[$attr])*
        pub fn $name(n: i32) -> Result<Integer, DomainError> {
            let n = small_arg(n, stringify!($name))?;
            let mut out = Integer::new();
            unsafe { $func(out.as_raw_mut(), n) };
            Ok(out)
        }
    )*};
}

impl Integer {
    /// Greatest common divisor; never negative.
    pub fn gcd(&self, other: &Integer) -> Integer {
        let mut g = Integer::new();
        unsafe { gmp::mpz_gcd(g.as_raw_mut(), self.as_raw(), other.as_raw()) };
        g
    }

    /// Least common multiple; never negative.
    pub fn lcm(&self, other: &Integer) -> Integer {
        let mut l = Integer::new();
        unsafe { gmp::mpz_lcm(l.as_raw_mut(), self.as_raw(), other.as_raw()) };
        l
    }

    /// Returns `(g, s, t)` with `g = gcd(self, other) = self * s + other * t`.
    pub fn extended_gcd(&self, other: &Integer) -> (Integer, Integer, Integer) {
        let mut g = Integer::new();
        let mut s = Integer::new();
        let mut t = Integer::new();
        unsafe {
            gmp::mpz_gcdext(
                g.as_raw_mut(),
                s.as_raw_mut(),
                t.as_raw_mut(),
                self.as_raw(),
                other.as_raw(),
            )
        };
        (g, s, t)
    }

    /// The inverse of `self` modulo `modulus`, in `0..|modulus|`.
    pub fn invert(&self, modulus: &Integer) -> Result<Integer, DomainError> {
        if modulus.is_zero() {
            return Err(DomainError::ZeroModulus);
        }
        let mut inv = Integer::new();
        let found = unsafe { gmp::mpz_invert(inv.as_raw_mut(), self.as_raw(), modulus.as_raw()) };
        if found == 0 {
            return Err(DomainError::NotInvertible);
        }
        Ok(inv)
    }

    /// `self ^ exponent mod modulus`, in `0..|modulus|`.
    ///
    /// A negative exponent raises the inverse of `self` instead and fails
    /// when there is none.
    pub fn pow_mod(&self, exponent: &Integer, modulus: &Integer) -> Result<Integer, DomainError> {
        if modulus.is_zero() {
            return Err(DomainError::ZeroModulus);
        }
        let mut out = Integer::new();
        if exponent.is_negative() {
            let base = self.invert(modulus)?;
            let exponent = -exponent;
            unsafe {
                gmp::mpz_powm(
                    out.as_raw_mut(),
                    base.as_raw(),
                    exponent.as_raw(),
                    modulus.as_raw(),
                )
            };
        } else {
            unsafe {
                gmp::mpz_powm(
                    out.as_raw_mut(),
                    self.as_raw(),
                    exponent.as_raw(),
                    modulus.as_raw(),
                )
            };
        }
        Ok(out)
    }

    /// [`pow_mod`](Integer::pow_mod) in time independent of the exponent's
    /// bits. The exponent must be positive and the modulus odd.
    pub fn secure_pow_mod(&self, exponent: &Integer, modulus: &Integer) -> Result<Integer, DomainError> {
        if modulus.is_zero() {
            return Err(DomainError::ZeroModulus);
        }
        if !exponent.is_positive() {
            return Err(DomainError::InvalidSecureExponent);
        }
        if modulus.is_even() {
            return Err(DomainError::EvenModulus);
        }
        let mut out = Integer::new();
        unsafe {
            gmp::mpz_powm_sec(
                out.as_raw_mut(),
                self.as_raw(),
                exponent.as_raw(),
                modulus.as_raw(),
            )
        };
        Ok(out)
    }

    /// Integer square root, rounded down.
    pub fn sqrt(&self) -> Result<Integer, DomainError> {
        if self.is_negative() {
            return Err(DomainError::NegativeArgument("sqrt"));
        }
        let mut root = Integer::new();
        unsafe { gmp::mpz_sqrt(root.as_raw_mut(), self.as_raw()) };
        Ok(root)
    }

    /// Returns `(s, r)` with `s * s + r == self` and `s` as large as possible.
    pub fn sqrt_rem(&self) -> Result<(Integer, Integer), DomainError> {
        if self.is_negative() {
            return Err(DomainError::NegativeArgument("sqrt_rem"));
        }
        let mut root = Integer::new();
        let mut rem = Integer::new();
        unsafe { gmp::mpz_sqrtrem(root.as_raw_mut(), rem.as_raw_mut(), self.as_raw()) };
        Ok((root, rem))
    }

    /// The `n`th root truncated toward zero. Odd roots of negative values are
    /// negative.
    pub fn root(&self, n: u32) -> Result<Integer, DomainError> {
        if n == 0 {
            return Err(DomainError::ZeroRoot);
        }
        if n % 2 == 0 && self.is_negative() {
            return Err(DomainError::EvenRootOfNegative);
        }
        let mut root = Integer::new();
        unsafe { gmp::mpz_root(root.as_raw_mut(), self.as_raw(), n.into()) };
        Ok(root)
    }

    pub fn is_perfect_square(&self) -> bool {
        unsafe { gmp::mpz_perfect_square_p(self.as_raw()) != 0 }
    }

    /// True when `self == a^b` for some integer `a` and `b > 1`. Zero and one
    /// qualify.
    pub fn is_perfect_power(&self) -> bool {
        unsafe { gmp::mpz_perfect_power_p(self.as_raw()) != 0 }
    }

    /// Trial division followed by `reps` Miller-Rabin rounds.
    pub fn is_probably_prime(&self, reps: u32) -> IsPrime {
        let reps = c_int::try_from(reps).unwrap_or(c_int::MAX);
        match unsafe { gmp::mpz_probab_prime_p(self.as_raw(), reps) } {
            0 => IsPrime::No,
            1 => IsPrime::Probably,
            _ => IsPrime::Yes,
        }
    }

    /// The smallest prime greater than `self`.
    pub fn next_prime(&self) -> Integer {
        let mut p = Integer::new();
        unsafe { gmp::mpz_nextprime(p.as_raw_mut(), self.as_raw()) };
        p
    }

    /// The largest prime smaller than `self`.
    ///
    /// Searches a window below `self` with [`next_prime`](Integer::next_prime),
    /// doubling the window until a prime turns up inside it.
    pub fn prev_prime(&self) -> Result<Integer, DomainError> {
        if *self <= 2u32 {
            return Err(DomainError::NoSmallerPrime);
        }
        let mut window = Integer::from(self.bit_length().max(8) * 2);
        loop {
            let mut low = self - &window;
            if low < 1u32 {
                low = Integer::from(1u32);
            }
            let mut p = low.next_prime();
            if p >= *self {
                debug!(window = %window, "no prime below the bound in window, doubling");
                window <<= 1u32;
                continue;
            }
            loop {
                let q = p.next_prime();
                if q >= *self {
                    return Ok(p);
                }
                trace!(prime = %q, "stepping toward bound");
                p = q;
            }
        }
    }

    /// The Jacobi symbol `(self / n)`; `n` must be odd and positive.
    pub fn jacobi(&self, n: &Integer) -> Result<i32, DomainError> {
        if !n.is_positive() || n.is_even() {
            return Err(DomainError::InvalidJacobiDenominator);
        }
        Ok(unsafe { gmp::mpz_jacobi(self.as_raw(), n.as_raw()) })
    }

    /// True when some integer `q` has `self == q * d`. Only zero is
    /// divisible by zero.
    pub fn is_divisible(&self, d: &Integer) -> bool {
        unsafe { gmp::mpz_divisible_p(self.as_raw(), d.as_raw()) != 0 }
    }

    /// The binomial coefficient `self` choose `k`; `self` may be negative.
    pub fn binomial(&self, k: i32) -> Result<Integer, DomainError> {
        let k = small_arg(k, "binomial")?;
        let mut out = Integer::new();
        unsafe { gmp::mpz_bin_ui(out.as_raw_mut(), self.as_raw(), k) };
        Ok(out)
    }

    sequence_fn! {
        /// `n!`
        factorial => gmp::mpz_fac_ui;
        /// `n!!`, the product of every other integer down from `n`.
        double_factorial => gmp::mpz_2fac_ui;
        /// The product of all primes up to `n`.
        primorial => gmp::mpz_primorial_ui;
        /// The `n`th Fibonacci number, `F(0) = 0`.
        fibonacci => gmp::mpz_fib_ui;
        /// The `n`th Lucas number, `L(0) = 2`.
        lucas => gmp::mpz_lucnum_ui;
    }
}

#[cfg(test)]
mod tests {
    use super::{IsPrime, DEFAULT_PRIMALITY_REPS};
    use crate::error::DomainError;
    use crate::Integer;

    fn int(v: i64) -> Integer {
        Integer::from(v)
    }

    fn sieve(limit: usize) -> Vec<bool> {
        let mut prime = vec![true; limit];
        prime[0] = false;
        prime[1] = false;
        let mut i = 2;
        while i * i < limit {
            if prime[i] {
                let mut j = i * i;
                while j < limit {
                    prime[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        prime
    }

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(int(-12).gcd(&int(18)), 6);
        assert_eq!(int(0).gcd(&int(-5)), 5);
        assert_eq!(int(4).lcm(&int(-6)), 12);
        assert_eq!(int(0).lcm(&int(6)), 0);
    }

    #[test]
    fn extended_gcd_identity() {
        let (a, b) = (int(240), int(46));
        let (g, s, t) = a.extended_gcd(&b);
        assert_eq!(g, 2);
        assert_eq!(&a * &s + &b * &t, g);
    }

    #[test]
    fn invert_checks_domain() {
        assert_eq!(int(3).invert(&int(7)).unwrap(), 5);
        assert_eq!(int(-3).invert(&int(7)).unwrap(), 2);
        assert_eq!(int(2).invert(&int(4)), Err(DomainError::NotInvertible));
        assert_eq!(int(2).invert(&int(0)), Err(DomainError::ZeroModulus));
    }

    #[test]
    fn pow_mod_handles_negative_exponent() {
        assert_eq!(int(4).pow_mod(&int(13), &int(497)).unwrap(), 445);
        assert_eq!(int(3).pow_mod(&int(-1), &int(7)).unwrap(), 5);
        assert_eq!(int(3).pow_mod(&int(-2), &int(7)).unwrap(), 4);
        assert_eq!(int(2).pow_mod(&int(-1), &int(4)), Err(DomainError::NotInvertible));
        assert_eq!(int(2).pow_mod(&int(3), &int(0)), Err(DomainError::ZeroModulus));
        assert_eq!(int(-2).pow_mod(&int(3), &int(5)).unwrap(), 2);
    }

    #[test]
    fn secure_pow_mod_domain() {
        assert_eq!(int(4).secure_pow_mod(&int(13), &int(497)).unwrap(), 445);
        assert_eq!(
            int(4).secure_pow_mod(&int(0), &int(497)),
            Err(DomainError::InvalidSecureExponent)
        );
        assert_eq!(
            int(4).secure_pow_mod(&int(3), &int(498)),
            Err(DomainError::EvenModulus)
        );
    }

    #[test]
    fn roots() {
        assert_eq!(int(99).sqrt().unwrap(), 9);
        let (s, r) = int(99).sqrt_rem().unwrap();
        assert_eq!((s, r), (int(9), int(18)));
        assert_eq!(int(-1).sqrt(), Err(DomainError::NegativeArgument("sqrt")));
        assert_eq!(int(-27).root(3).unwrap(), -3);
        assert_eq!(int(-30).root(3).unwrap(), -3);
        assert_eq!(int(80).root(4).unwrap(), 2);
        assert_eq!(int(-16).root(4), Err(DomainError::EvenRootOfNegative));
        assert_eq!(int(16).root(0), Err(DomainError::ZeroRoot));
    }

    #[test]
    fn perfect_powers() {
        assert!(int(144).is_perfect_square());
        assert!(!int(145).is_perfect_square());
        assert!(!int(-4).is_perfect_square());
        assert!(int(243).is_perfect_power());
        assert!(int(-8).is_perfect_power());
        assert!(!int(-4).is_perfect_power());
        assert!(!int(10).is_perfect_power());
    }

    #[test]
    fn primality() {
        assert_eq!(int(97).is_probably_prime(DEFAULT_PRIMALITY_REPS), IsPrime::Yes);
        assert_eq!(int(91).is_probably_prime(DEFAULT_PRIMALITY_REPS), IsPrime::No);
        let m127 = (Integer::from(1) << 127u32) - 1u32;
        assert_ne!(m127.is_probably_prime(DEFAULT_PRIMALITY_REPS), IsPrime::No);
        assert_eq!(int(1).is_probably_prime(DEFAULT_PRIMALITY_REPS), IsPrime::No);
    }

    #[test]
    fn next_prime_steps_forward() {
        assert_eq!(int(0).next_prime(), 2);
        assert_eq!(int(2).next_prime(), 3);
        assert_eq!(int(13).next_prime(), 17);
        assert_eq!(int(-10).next_prime(), 2);
    }

    #[test]
    fn prev_prime_matches_sieve() {
        let limit = 5000;
        let prime = sieve(limit);
        let mut last = None;
        for n in 0..limit {
            let got = int(n as i64).prev_prime();
            match last {
                None => assert_eq!(got, Err(DomainError::NoSmallerPrime), "n = {}", n),
                Some(p) => assert_eq!(got.unwrap(), p as i64, "n = {}", n),
            }
            if prime[n] {
                last = Some(n);
            }
        }
    }

    #[test]
    fn prev_prime_large() {
        // 2^89 - 1 is a Mersenne prime
        let m89 = (Integer::from(1) << 89u32) - 1u32;
        assert_eq!((&m89 + 1u32).prev_prime().unwrap(), m89);
        assert_eq!(m89.next_prime().prev_prime().unwrap(), m89);
    }

    #[test]
    fn jacobi_symbol() {
        assert_eq!(int(1001).jacobi(&int(9907)).unwrap(), -1);
        assert_eq!(int(19).jacobi(&int(45)).unwrap(), 1);
        assert_eq!(int(5).jacobi(&int(10)), Err(DomainError::InvalidJacobiDenominator));
        assert_eq!(int(5).jacobi(&int(-3)), Err(DomainError::InvalidJacobiDenominator));
    }

    #[test]
    fn divisibility() {
        assert!(int(-12).is_divisible(&int(4)));
        assert!(!int(13).is_divisible(&int(4)));
        assert!(int(0).is_divisible(&int(0)));
        assert!(!int(3).is_divisible(&int(0)));
    }

    #[test]
    fn sequences() {
        assert_eq!(Integer::factorial(0).unwrap(), 1);
        assert_eq!(Integer::factorial(20).unwrap(), 2_432_902_008_176_640_000u64);
        assert_eq!(Integer::double_factorial(7).unwrap(), 105);
        assert_eq!(Integer::primorial(10).unwrap(), 210);
        assert_eq!(Integer::fibonacci(10).unwrap(), 55);
        assert_eq!(Integer::lucas(0).unwrap(), 2);
        assert_eq!(Integer::lucas(10).unwrap(), 123);
        assert_eq!(
            Integer::factorial(-1),
            Err(DomainError::NegativeArgument("factorial"))
        );
        assert!(Integer::fibonacci(-3).is_err());
    }

    #[test]
    fn binomials() {
        assert_eq!(int(10).binomial(3).unwrap(), 120);
        assert_eq!(int(-3).binomial(2).unwrap(), 6);
        assert_eq!(int(5).binomial(7).unwrap(), 0);
        assert_eq!(int(5).binomial(-1), Err(DomainError::NegativeArgument("binomial")));
    }
}
