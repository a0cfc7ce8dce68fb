/*
    Helper traits implemented for Integer
*/

use crate::error::{DomainError, ParseError, RangeError};
use crate::integer::{bitcnt, Integer};
use crate::traits::{
    BitManipulation, ConvertFrom, Converter, Modulo, NumberTests, ZeroizeBN, EGCD,
};
use gmp_mpfr_sys::gmp::{self, bitcnt_t};
use std::ptr;
use std::sync::atomic;

impl ZeroizeBN for Integer {
    fn zeroize_bn(&mut self) {
        let capacity = self.allocated_limbs();
        let limbs = self.limbs_ptr();
        for i in 0..capacity {
            unsafe { ptr::write_volatile(limbs.add(i), 0) };
        }
        self.clear_size();
        atomic::fence(atomic::Ordering::SeqCst);
        atomic::compiler_fence(atomic::Ordering::SeqCst);
    }
}

impl Converter for Integer {
    fn to_vec(value: &Integer) -> Vec<u8> {
        value.to_bytes_be()
    }

    fn to_hex(&self) -> String {
        self.to_string_radix(16)
    }

    fn from_hex(value: &str) -> Result<Integer, ParseError> {
        Integer::from_str_radix(value, 16)
    }

    fn from_bytes(bytes: &[u8]) -> Integer {
        Integer::from_bytes_be(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_bytes_be()
    }
}

fn reduce(a: &Integer, modulus: &Integer) -> Result<Integer, DomainError> {
    if modulus.is_zero() {
        return Err(DomainError::ZeroModulus);
    }
    Ok(a.mod_floor(modulus))
}

impl Modulo for Integer {
    fn mod_pow(base: &Self, exponent: &Self, modulus: &Self) -> Result<Self, DomainError> {
        base.pow_mod(exponent, modulus)
    }

    fn mod_mul(a: &Self, b: &Self, modulus: &Self) -> Result<Self, DomainError> {
        let product = reduce(a, modulus)? * reduce(b, modulus)?;
        reduce(&product, modulus)
    }

    fn mod_sub(a: &Self, b: &Self, modulus: &Self) -> Result<Self, DomainError> {
        let a_m = reduce(a, modulus)?;
        let b_m = reduce(b, modulus)?;
        reduce(&(a_m - b_m), modulus)
    }

    fn mod_add(a: &Self, b: &Self, modulus: &Self) -> Result<Self, DomainError> {
        let sum = reduce(a, modulus)? + reduce(b, modulus)?;
        reduce(&sum, modulus)
    }

    fn mod_inv(a: &Self, modulus: &Self) -> Result<Self, DomainError> {
        a.invert(modulus)
    }
}

impl NumberTests for Integer {
    fn is_zero(me: &Self) -> bool {
        me.is_zero()
    }
    fn is_even(me: &Self) -> bool {
        me.is_even()
    }
    fn is_negative(me: &Self) -> bool {
        me.is_negative()
    }
    fn bits(me: &Self) -> usize {
        me.bit_length() as usize
    }
}

impl EGCD for Integer {
    fn egcd(a: &Self, b: &Self) -> (Self, Self, Self) {
        a.extended_gcd(b)
    }
}

impl BitManipulation for Integer {
    fn set_bit(self: &mut Self, bit: usize, bit_val: bool) {
        let bit = bitcnt(bit);
        unsafe {
            if bit_val {
                gmp::mpz_setbit(self.as_raw_mut(), bit);
            } else {
                gmp::mpz_clrbit(self.as_raw_mut(), bit);
            }
        }
    }

    fn test_bit(self: &Self, bit: usize) -> bool {
        match bitcnt_t::try_from(bit) {
            Ok(bit) => unsafe { gmp::mpz_tstbit(self.as_raw(), bit) != 0 },
            // past every index the engine can address, only the sign answers
            Err(_) => self.is_negative(),
        }
    }
}

impl ConvertFrom<Integer> for u64 {
    fn convert_from(x: &Integer) -> Result<u64, RangeError> {
        x.to_native()
    }
}
