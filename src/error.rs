//! Error types for gmpint

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Malformed text handed to [`Integer::from_str_radix`](crate::Integer::from_str_radix).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid base {0}, expected 0 or 2..=62")]
    InvalidBase(i32),

    #[error("no digits to parse")]
    Empty,

    #[error("invalid digit {digit:?} at byte {index}")]
    InvalidDigit { index: usize, digit: char },
}

/// Mathematically undefined input, detected before reaching the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("negative exponent")]
    NegativeExponent,

    #[error("negative argument to {0}")]
    NegativeArgument(&'static str),

    #[error("zero modulus")]
    ZeroModulus,

    #[error("value has no inverse for this modulus")]
    NotInvertible,

    #[error("even root of a negative value")]
    EvenRootOfNegative,

    #[error("zeroth root")]
    ZeroRoot,

    #[error("no prime smaller than the given value")]
    NoSmallerPrime,

    #[error("negative values have infinitely many set bits")]
    UnboundedBits,

    #[error("{nails} nail bits leave nothing of a {bits}-bit word")]
    InvalidNails { nails: u32, bits: u32 },

    #[error("empty sampling range")]
    EmptyRange,

    #[error("jacobi symbol needs an odd positive denominator")]
    InvalidJacobiDenominator,

    #[error("secure modular exponentiation needs a positive exponent")]
    InvalidSecureExponent,

    #[error("secure modular exponentiation needs an odd modulus")]
    EvenModulus,
}

/// The value does not fit the requested native type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("value out of range for {target}")]
pub struct RangeError {
    pub target: &'static str,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("range error: {0}")]
    Range(#[from] RangeError),

    #[error("entropy source failed: {0}")]
    Entropy(#[from] getrandom::Error),
}
