// based on MIT/Apache-licensed https://github.com/KZen-networks/curv/blob/master/src/arithmetic/traits.rs

use crate::error::{DomainError, ParseError, RangeError, Result};
use std::cmp::Ordering;
use std::marker::Sized;

/// Stores the value of `src` into `self`, reusing `self`'s buffer.
pub trait Assign<Src = Self> {
    fn assign(&mut self, src: Src);
}

/// Relational operators on absolute values.
pub trait MagnitudeOrd<Rhs: ?Sized = Self> {
    fn cmp_magnitude(&self, other: &Rhs) -> Ordering;

    fn eq_abs(&self, other: &Rhs) -> bool {
        self.cmp_magnitude(other) == Ordering::Equal
    }
    fn ne_abs(&self, other: &Rhs) -> bool {
        self.cmp_magnitude(other) != Ordering::Equal
    }
    fn lt_abs(&self, other: &Rhs) -> bool {
        self.cmp_magnitude(other) == Ordering::Less
    }
    fn le_abs(&self, other: &Rhs) -> bool {
        self.cmp_magnitude(other) != Ordering::Greater
    }
    fn gt_abs(&self, other: &Rhs) -> bool {
        self.cmp_magnitude(other) == Ordering::Greater
    }
    fn ge_abs(&self, other: &Rhs) -> bool {
        self.cmp_magnitude(other) != Ordering::Less
    }
}

pub trait ZeroizeBN {
    fn zeroize_bn(&mut self);
}

pub trait Converter: Sized {
    fn to_vec(n: &Self) -> Vec<u8>;
    fn to_hex(&self) -> String;
    fn from_hex(n: &str) -> std::result::Result<Self, ParseError>;
    fn from_bytes(bytes: &[u8]) -> Self;
    fn to_bytes(&self) -> Vec<u8>;
}

pub trait Modulo: Sized {
    fn mod_pow(base: &Self, exponent: &Self, modulus: &Self) -> std::result::Result<Self, DomainError>;
    fn mod_mul(a: &Self, b: &Self, modulus: &Self) -> std::result::Result<Self, DomainError>;
    fn mod_sub(a: &Self, b: &Self, modulus: &Self) -> std::result::Result<Self, DomainError>;
    fn mod_add(a: &Self, b: &Self, modulus: &Self) -> std::result::Result<Self, DomainError>;
    fn mod_inv(a: &Self, modulus: &Self) -> std::result::Result<Self, DomainError>;
}

pub trait Samplable: Sized {
    fn sample_below(upper: &Self) -> Result<Self>;
    fn sample_range(lower: &Self, upper: &Self) -> Result<Self>;
    fn strict_sample_range(lower: &Self, upper: &Self) -> Result<Self>;
    fn sample(bitsize: usize) -> Result<Self>;
    fn strict_sample(bit_size: usize) -> Result<Self>;
    fn random_prime(bit_size: usize) -> Result<Self>;
}

pub trait NumberTests {
    fn is_zero(_: &Self) -> bool;
    fn is_even(_: &Self) -> bool;
    fn is_negative(_: &Self) -> bool;
    fn bits(_: &Self) -> usize;
}

pub trait EGCD
where
    Self: Sized,
{
    fn egcd(a: &Self, b: &Self) -> (Self, Self, Self);
}

pub trait BitManipulation {
    fn set_bit(self: &mut Self, bit: usize, bit_val: bool);
    fn test_bit(self: &Self, bit: usize) -> bool;
}

pub trait ConvertFrom<T>: Sized {
    fn convert_from(_: &T) -> std::result::Result<Self, RangeError>;
}
