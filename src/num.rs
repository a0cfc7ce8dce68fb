/*
    num-bigint interop, enabled by the num_bigint feature
*/

use crate::error::ParseError;
use crate::integer::{Integer, Sign};
use num_bigint::BigInt;
use num_integer::Integer as NumInteger;
use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};

impl From<&BigInt> for Integer {
    fn from(value: &BigInt) -> Integer {
        let (sign, bytes) = value.to_bytes_le();
        let mut i = Integer::from_bytes_le(&bytes);
        if sign == num_bigint::Sign::Minus {
            i.neg_mut();
        }
        i
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Integer {
        Integer::from(&value)
    }
}

impl From<&Integer> for BigInt {
    fn from(value: &Integer) -> BigInt {
        let sign = match value.sign() {
            Sign::Negative => num_bigint::Sign::Minus,
            Sign::Zero => num_bigint::Sign::NoSign,
            Sign::Positive => num_bigint::Sign::Plus,
        };
        BigInt::from_bytes_le(sign, &value.to_bytes_le())
    }
}

impl From<Integer> for BigInt {
    fn from(value: Integer) -> BigInt {
        BigInt::from(&value)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Integer::new()
    }

    fn is_zero(&self) -> bool {
        Integer::is_zero(self)
    }
}

impl One for Integer {
    fn one() -> Self {
        Integer::from(1u32)
    }
}

impl Num for Integer {
    type FromStrRadixErr = ParseError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseError> {
        let radix = i32::try_from(radix).map_err(|_| ParseError::InvalidBase(i32::MAX))?;
        Integer::from_str_radix(s, radix)
    }
}

impl Signed for Integer {
    fn abs(&self) -> Self {
        self.clone().abs()
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Integer::new()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        match self.sign() {
            Sign::Negative => Integer::from(-1),
            Sign::Zero => Integer::new(),
            Sign::Positive => Integer::from(1),
        }
    }

    fn is_positive(&self) -> bool {
        Integer::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        Integer::is_negative(self)
    }
}

impl ToPrimitive for Integer {
    fn to_i64(&self) -> Option<i64> {
        self.to_native().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_native().ok()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_native().ok()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_native().ok()
    }
}

impl FromPrimitive for Integer {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Integer::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Integer::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Integer::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Integer::from(n))
    }
}

impl Pow<u32> for Integer {
    type Output = Integer;

    fn pow(self, exp: u32) -> Integer {
        Integer::pow(&self, exp)
    }
}

impl Pow<u32> for &Integer {
    type Output = Integer;

    fn pow(self, exp: u32) -> Integer {
        Integer::pow(self, exp)
    }
}

impl NumInteger for Integer {
    fn div_floor(&self, other: &Self) -> Self {
        Integer::div_floor(self, other)
    }

    fn mod_floor(&self, other: &Self) -> Self {
        Integer::mod_floor(self, other)
    }

    fn gcd(&self, other: &Self) -> Self {
        Integer::gcd(self, other)
    }

    fn lcm(&self, other: &Self) -> Self {
        Integer::lcm(self, other)
    }

    fn divides(&self, other: &Self) -> bool {
        self.is_divisible(other)
    }

    fn is_multiple_of(&self, other: &Self) -> bool {
        self.is_divisible(other)
    }

    fn is_even(&self) -> bool {
        Integer::is_even(self)
    }

    fn is_odd(&self) -> bool {
        Integer::is_odd(self)
    }

    // num-integer defines div_rem as truncating
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        self.div_rem_trunc(other)
    }

    fn div_mod_floor(&self, other: &Self) -> (Self, Self) {
        self.div_mod(other)
    }
}

#[cfg(test)]
mod tests {
    use crate::Integer;
    use num_bigint::BigInt;
    use num_integer::Integer as NumInteger;
    use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};
    use std::str::FromStr;

    #[test]
    fn bigint_round_trip() {
        for s in ["0", "1", "-1", "-340282366920938463463374607431768211457", "18446744073709551616"] {
            let b = BigInt::from_str(s).unwrap();
            let i = Integer::from(&b);
            assert_eq!(i.to_string(), s);
            assert_eq!(BigInt::from(&i), b);
        }
    }

    #[test]
    fn num_traits_surface() {
        assert!(<Integer as Zero>::is_zero(&Integer::zero()));
        assert_eq!(Integer::one(), 1);
        assert_eq!(<Integer as Num>::from_str_radix("-ff", 16).unwrap(), -255);
        assert_eq!(Signed::abs(&Integer::from(-3)), 3);
        assert_eq!(Integer::from(-3).signum(), -1);
        assert_eq!(Integer::from(3).abs_sub(&Integer::from(5)), 0);
        assert_eq!(Integer::from(-3).to_i64(), Some(-3));
        assert_eq!(Integer::from(-3).to_u64(), None);
        assert_eq!(Integer::from_u128(u128::MAX).unwrap(), u128::MAX);
        assert_eq!(Pow::pow(Integer::from(3), 4u32), 81);
    }

    #[test]
    fn num_integer_semantics() {
        let a = Integer::from(-7);
        let b = Integer::from(2);
        assert_eq!(NumInteger::div_rem(&a, &b), (Integer::from(-3), Integer::from(-1)));
        assert_eq!(NumInteger::div_mod_floor(&a, &b), (Integer::from(-4), Integer::from(1)));
        assert!(NumInteger::is_multiple_of(&Integer::from(12), &Integer::from(4)));
        assert_eq!(NumInteger::lcm(&Integer::from(4), &Integer::from(6)), 12);
    }
}
