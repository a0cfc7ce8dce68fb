//! Arbitrary-precision signed integers on top of GMP.
//!
//! [`Integer`] owns one GMP `mpz_t`. Operators accept owned, borrowed and
//! native operands on either side and pick the cheapest engine routine at
//! compile time. Division is floored. The value can also be read as an
//! infinite two's-complement bit string and exported to word sequences.
//!
//! ```
//! use gmpint::Integer;
//!
//! let mut x: Integer = "0xff".parse().unwrap();
//! x *= 1u32 << 20;
//! x -= -5i32;
//! let (q, r) = Integer::from(19999).div_mod(&Integer::from(-17));
//! assert_eq!((q, r), (Integer::from(-1177), Integer::from(-10)));
//! assert_eq!(x % 10u32, 5);
//! ```

#[macro_use]
mod arith;

mod big_num;
mod bits;
mod cmp;
mod convert;
pub mod error;
mod integer;
mod number_theory;
#[cfg(feature = "num_bigint")]
mod num;
mod random;
pub mod serialize;
mod text;
pub mod traits;
mod words;

pub use bits::Ones;
pub use convert::NativeInt;
pub use error::{DomainError, Error, ParseError, RangeError};
pub use integer::{Integer, Sign};
pub use number_theory::{IsPrime, DEFAULT_PRIMALITY_REPS};
pub use traits::{
    Assign, BitManipulation, ConvertFrom, Converter, MagnitudeOrd, Modulo, NumberTests,
    Samplable, ZeroizeBN, EGCD,
};
pub use words::{Endianness, Word, WordFormat, WordOrder};
