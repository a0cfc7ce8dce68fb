/*
    Random sampling from OS entropy
*/

use crate::error::{DomainError, RangeError, Result};
use crate::integer::Integer;
use crate::number_theory::{IsPrime, DEFAULT_PRIMALITY_REPS};
use crate::traits::Samplable;
use crate::words::{Endianness, WordFormat, WordOrder};
use getrandom::getrandom;
use tracing::{debug, trace};

const BYTES_MSF: WordFormat = WordFormat::new(WordOrder::Msf, Endianness::Native);

fn bit_index(bits: usize) -> Result<u32> {
    u32::try_from(bits).map_err(|_| RangeError { target: "u32" }.into())
}

impl Samplable for Integer {
    fn sample_below(upper: &Self) -> Result<Self> {
        if !upper.is_positive() {
            return Err(DomainError::EmptyRange.into());
        }
        let bits = upper.bit_length() as usize;
        let mut rejected = 0u32;
        loop {
            let n = Self::sample(bits)?;
            if n < *upper {
                return Ok(n);
            }
            rejected += 1;
            trace!(rejected, "sample not below bound, drawing again");
        }
    }

    fn sample_range(lower: &Self, upper: &Self) -> Result<Self> {
        if upper <= lower {
            return Err(DomainError::EmptyRange.into());
        }
        Ok(lower + Self::sample_below(&(upper - lower))?)
    }

    fn strict_sample_range(lower: &Self, upper: &Self) -> Result<Self> {
        Self::sample_range(lower, upper)
    }

    fn sample(bit_size: usize) -> Result<Self> {
        let bits = bit_index(bit_size)?;
        if bits == 0 {
            return Ok(Integer::new());
        }
        let bytes = (bit_size - 1) / 8 + 1;
        let mut buf: Vec<u8> = vec![0; bytes];
        getrandom(&mut buf)?;
        let mut n = Integer::from_words(&buf, BYTES_MSF)?;
        n.keep_bits_mut(bits);
        Ok(n)
    }

    fn strict_sample(bit_size: usize) -> Result<Self> {
        let bits = bit_index(bit_size)?;
        if bits == 0 {
            return Err(DomainError::EmptyRange.into());
        }
        let mut n = Self::sample(bit_size)?;
        n.set_bit(bits - 1, true);
        Ok(n)
    }

    fn random_prime(bit_size: usize) -> Result<Self> {
        if bit_size < 2 {
            return Err(DomainError::EmptyRange.into());
        }
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            // starting one below lets the sample itself be picked
            let start = Self::strict_sample(bit_size)? - 1u32;
            let p = start.next_prime();
            if p.bit_length() as usize == bit_size {
                debug_assert_ne!(p.is_probably_prime(DEFAULT_PRIMALITY_REPS), IsPrime::No);
                debug!(bits = bit_size, attempts, "found random prime");
                return Ok(p);
            }
            trace!(bits = bit_size, "next prime overflowed the bit length");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{DomainError, Error};
    use crate::number_theory::{IsPrime, DEFAULT_PRIMALITY_REPS};
    use crate::traits::Samplable;
    use crate::Integer;
    use std::cmp;

    #[test]
    fn sample_below_zero_test() {
        let err = Integer::sample_below(&Integer::from(-1)).unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::EmptyRange)));
        assert!(Integer::sample_below(&Integer::new()).is_err());
    }

    #[test]
    fn sample_below_test() {
        let upper_bound = Integer::from(10);

        for _ in 1..100 {
            let r = Integer::sample_below(&upper_bound).unwrap();
            assert!(r < upper_bound && r >= 0);
        }
    }

    #[test]
    fn invalid_range_test() {
        assert!(Integer::sample_range(&Integer::from(10), &Integer::from(9)).is_err());
        assert!(Integer::sample_range(&Integer::from(10), &Integer::from(10)).is_err());
    }

    #[test]
    fn sample_range_test() {
        let upper_bound = Integer::from(10);
        let lower_bound = Integer::from(-5);
        for _ in 1..100 {
            let r = Integer::sample_range(&lower_bound, &upper_bound).unwrap();
            assert!(r < upper_bound && r >= lower_bound);
        }
    }

    #[test]
    fn strict_sample_range_test() {
        let len = 249;

        for _ in 1..100 {
            let a = Integer::sample(len).unwrap();
            let b = Integer::strict_sample(len).unwrap();
            let lower_bound = cmp::min(a.clone(), b.clone());
            let upper_bound = cmp::max(a, b);
            if lower_bound == upper_bound {
                continue;
            }
            let r = Integer::strict_sample_range(&lower_bound, &upper_bound).unwrap();
            assert!(r < upper_bound && r >= lower_bound);
        }
    }

    #[test]
    fn sample_respects_bit_size() {
        assert_eq!(Integer::sample(0).unwrap(), 0);
        for len in [1usize, 7, 8, 9, 63, 64, 65, 130] {
            let a = Integer::sample(len).unwrap();
            assert!(a.bit_length() as usize <= len);
            assert!(!a.is_negative());
        }
    }

    #[test]
    fn strict_sample_test() {
        let len = 249;
        for _ in 1..100 {
            let a = Integer::strict_sample(len).unwrap();
            assert_eq!(a.bit_length() as usize, len);
        }
        assert_eq!(Integer::strict_sample(1).unwrap(), 1);
        assert!(Integer::strict_sample(0).is_err());
    }

    #[test]
    fn random_prime_test() {
        for len in [2usize, 3, 16, 64, 160] {
            let p = Integer::random_prime(len).unwrap();
            assert_eq!(p.bit_length() as usize, len);
            assert_ne!(p.is_probably_prime(DEFAULT_PRIMALITY_REPS), IsPrime::No);
        }
        assert!(Integer::random_prime(1).is_err());
    }

    #[test]
    fn oversized_bit_count_is_range_error() {
        if let Some(bits) = (u32::MAX as usize).checked_add(1) {
            assert!(matches!(Integer::sample(bits), Err(Error::Range(_))));
        }
    }
}
