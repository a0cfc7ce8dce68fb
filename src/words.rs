//! Conversion between the magnitude of an [`Integer`] and sequences of
//! fixed-width words.
//!
//! A [`WordFormat`] fixes three parameters: which word comes first, the byte
//! order inside each word, and how many high "nail" bits of every word are
//! ignored. With `n` nails a `W`-bit word carries `W - n` significant bits,
//! so the sequence is read in base `2^(W - n)`.
//!
//! ```
//! use gmpint::{Integer, WordFormat, WordOrder, Endianness};
//!
//! let fmt = WordFormat::new(WordOrder::Msf, Endianness::Native);
//! let i = Integer::from_words(&[0x1234u16, 0x5678], fmt).unwrap();
//! assert_eq!(i, 0x1234_5678);
//! assert_eq!(i.to_words::<u16>(fmt).unwrap(), vec![0x1234, 0x5678]);
//! ```

use crate::error::DomainError;
use crate::integer::Integer;
use gmp_mpfr_sys::gmp;
use serde_derive::{Deserialize, Serialize};
use std::mem;
use std::os::raw::c_int;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordOrder {
    /// Least significant word first.
    Lsf,
    /// Most significant word first.
    Msf,
}

/// Byte order inside one word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endianness {
    Native,
    Little,
    Big,
}

impl WordOrder {
    #[inline]
    fn raw(self) -> c_int {
        match self {
            WordOrder::Lsf => -1,
            WordOrder::Msf => 1,
        }
    }
}

impl Endianness {
    #[inline]
    fn raw(self) -> c_int {
        match self {
            Endianness::Native => 0,
            Endianness::Little => -1,
            Endianness::Big => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordFormat {
    pub order: WordOrder,
    pub endian: Endianness,
    #[serde(default)]
    pub nails: u32,
}

impl WordFormat {
    pub const fn new(order: WordOrder, endian: Endianness) -> Self {
        WordFormat {
            order,
            endian,
            nails: 0,
        }
    }

    pub const fn with_nails(self, nails: u32) -> Self {
        WordFormat { nails, ..self }
    }

    fn checked_nails<W: Word>(&self) -> Result<usize, DomainError> {
        if self.nails >= W::BITS {
            return Err(DomainError::InvalidNails {
                nails: self.nails,
                bits: W::BITS,
            });
        }
        Ok(self.nails as usize)
    }
}

impl Default for WordFormat {
    fn default() -> Self {
        WordFormat::new(WordOrder::Lsf, Endianness::Native)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// An unsigned native type usable as a serialization word.
pub trait Word: Copy + Default + sealed::Sealed {
    const BITS: u32;
}

macro_rules! word {
    ($($t:ty)*) => {$(
        impl sealed::Sealed for $t {}

        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
        }
    )*};
}

word! { u8 u16 u32 u64 u128 usize }

impl Integer {
    /// Reads `words` as an unsigned magnitude. The result is never negative;
    /// callers apply a sign separately.
    pub fn from_words<W: Word>(words: &[W], format: WordFormat) -> Result<Integer, DomainError> {
        let nails = format.checked_nails::<W>()?;
        let mut i = Integer::new();
        unsafe { i.import_words(words, format, nails) };
        Ok(i)
    }

    /// Writes the magnitude as the shortest word sequence; zero gives an
    /// empty vector.
    pub fn to_words<W: Word>(&self, format: WordFormat) -> Result<Vec<W>, DomainError> {
        let nails = format.checked_nails::<W>()?;
        Ok(unsafe { self.export_words(format, nails) })
    }

    /// Length of the sequence [`to_words`](Integer::to_words) would produce.
    pub fn significant_words<W: Word>(&self, nails: u32) -> Result<usize, DomainError> {
        let nails = WordFormat::default().with_nails(nails).checked_nails::<W>()?;
        Ok(self.word_count::<W>(nails))
    }

    fn word_count<W: Word>(&self, nails: usize) -> usize {
        let per_word = W::BITS as usize - nails;
        (self.bit_length() as usize + per_word - 1) / per_word
    }

    // Safety: `nails` must be below `W::BITS`.
    unsafe fn import_words<W: Word>(&mut self, words: &[W], format: WordFormat, nails: usize) {
        gmp::mpz_import(
            self.as_raw_mut(),
            words.len(),
            format.order.raw(),
            mem::size_of::<W>(),
            format.endian.raw(),
            nails,
            words.as_ptr().cast(),
        );
    }

    // Safety: `nails` must be below `W::BITS`.
    unsafe fn export_words<W: Word>(&self, format: WordFormat, nails: usize) -> Vec<W> {
        let count = self.word_count::<W>(nails);
        let mut words = vec![W::default(); count];
        if count > 0 {
            let mut written = 0usize;
            gmp::mpz_export(
                words.as_mut_ptr().cast(),
                &mut written,
                format.order.raw(),
                mem::size_of::<W>(),
                format.endian.raw(),
                nails,
                self.as_raw(),
            );
            debug_assert_eq!(written, count);
        }
        words
    }

    /// Magnitude from big-endian bytes.
    pub fn from_bytes_be(bytes: &[u8]) -> Integer {
        let mut i = Integer::new();
        let format = WordFormat::new(WordOrder::Msf, Endianness::Native);
        unsafe { i.import_words(bytes, format, 0) };
        i
    }

    /// Magnitude from little-endian bytes.
    pub fn from_bytes_le(bytes: &[u8]) -> Integer {
        let mut i = Integer::new();
        let format = WordFormat::new(WordOrder::Lsf, Endianness::Native);
        unsafe { i.import_words(bytes, format, 0) };
        i
    }

    /// Big-endian bytes of the magnitude.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        unsafe { self.export_words(WordFormat::new(WordOrder::Msf, Endianness::Native), 0) }
    }

    /// Little-endian bytes of the magnitude.
    pub fn to_bytes_le(&self) -> Vec<u8> {
        unsafe { self.export_words(WordFormat::new(WordOrder::Lsf, Endianness::Native), 0) }
    }
}
