//! Property tests, checked against num-bigint where an independent answer
//! is needed.

use gmpint::{Endianness, Integer, MagnitudeOrd, Sign, WordFormat, WordOrder};
use num_bigint::BigInt;
use num_integer::Integer as _;
use proptest::prelude::*;
use std::cmp::Ordering;

fn to_oracle(i: &Integer) -> BigInt {
    BigInt::parse_bytes(i.to_string().as_bytes(), 10).unwrap()
}

fn arb_integer() -> impl Strategy<Value = Integer> {
    (any::<bool>(), prop::collection::vec(any::<u8>(), 0..48)).prop_map(|(negative, bytes)| {
        let i = Integer::from_bytes_be(&bytes);
        if negative {
            -i
        } else {
            i
        }
    })
}

fn arb_format() -> impl Strategy<Value = WordFormat> {
    (
        prop_oneof![Just(WordOrder::Lsf), Just(WordOrder::Msf)],
        prop_oneof![
            Just(Endianness::Native),
            Just(Endianness::Little),
            Just(Endianness::Big)
        ],
        0u32..8,
    )
        .prop_map(|(order, endian, nails)| WordFormat::new(order, endian).with_nails(nails))
}

proptest! {
    #[test]
    fn words_round_trip(v in arb_integer(), fmt in arb_format()) {
        let magnitude = v.clone().abs();
        let bytes = v.to_words::<u8>(fmt).unwrap();
        prop_assert_eq!(Integer::from_words(&bytes, fmt).unwrap(), magnitude.clone());
        let quads = v.to_words::<u32>(fmt).unwrap();
        prop_assert_eq!(quads.len(), v.significant_words::<u32>(fmt.nails).unwrap());
        prop_assert_eq!(Integer::from_words(&quads, fmt).unwrap(), magnitude);
    }

    #[test]
    fn div_mod_law(a in arb_integer(), b in arb_integer()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_mod(&b);
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert!(r.is_zero() || r.sign() == b.sign());
        prop_assert!(r.lt_abs(&b));
        let (oq, or) = to_oracle(&a).div_mod_floor(&to_oracle(&b));
        prop_assert_eq!(to_oracle(&q), oq);
        prop_assert_eq!(to_oracle(&r), or);
    }

    #[test]
    fn cmp_abs_matches_abs(a in arb_integer(), b in arb_integer()) {
        prop_assert_eq!(a.cmp_abs(&b), a.clone().abs().cmp(&b.clone().abs()));
        prop_assert_eq!(a.cmp(&b), to_oracle(&a).cmp(&to_oracle(&b)));
    }

    #[test]
    fn bit_view_consistent(v in arb_integer()) {
        let v = v.abs();
        let set: Vec<u64> = (0..v.bit_length() as u32 + 8)
            .filter(|&i| v.bit(i))
            .map(u64::from)
            .collect();
        prop_assert_eq!(v.count_ones(), set.len() as u64);
        prop_assert_eq!(v.bit_length(), set.last().map_or(0, |&top| top + 1));
        prop_assert_eq!(v.ones().unwrap().collect::<Vec<_>>(), set);
        prop_assert_eq!(v.bit_length(), to_oracle(&v).bits());
    }

    #[test]
    fn negative_bits_are_twos_complement(v in arb_integer(), index in 0u32..400) {
        let expanded = (-&v - 1u32).bit(index);
        // !v == -v - 1 flips every bit of the expansion
        prop_assert_eq!(v.bit(index), !expanded);
        prop_assert_eq!((!&v).bit(index), expanded);
    }

    #[test]
    fn mixed_dispatch_unsigned(x in arb_integer(), u in any::<u64>()) {
        let big = Integer::from(u);
        prop_assert_eq!(&x + u, &x + &big);
        prop_assert_eq!(&x - u, &x - &big);
        prop_assert_eq!(u - &x, &big - &x);
        prop_assert_eq!(&x * u, &x * &big);
        prop_assert_eq!(&x & u, &x & &big);
        prop_assert_eq!(&x | u, &x | &big);
        prop_assert_eq!(&x ^ u, &x ^ &big);
        if u != 0 {
            prop_assert_eq!(&x / u, &x / &big);
            prop_assert_eq!(&x % u, &x % &big);
        }
        if !x.is_zero() {
            prop_assert_eq!(u / &x, &big / &x);
            prop_assert_eq!(u % &x, &big % &x);
        }
        prop_assert_eq!(x.partial_cmp(&u), Some(x.cmp(&big)));
        prop_assert_eq!(x.cmp_magnitude(&u), x.cmp_abs(&big));
    }

    #[test]
    fn mixed_dispatch_signed(x in arb_integer(), i in any::<i64>()) {
        let big = Integer::from(i);
        prop_assert_eq!(&x + i, &x + &big);
        prop_assert_eq!(&x - i, &x - &big);
        prop_assert_eq!(i - &x, &big - &x);
        prop_assert_eq!(&x * i, &x * &big);
        prop_assert_eq!(&x & i, &x & &big);
        if i != 0 {
            prop_assert_eq!(&x / i, &x / &big);
            prop_assert_eq!(&x % i, &x % &big);
        }
        let mut assigned = x.clone();
        assigned -= i;
        prop_assert_eq!(assigned, &x - &big);
        prop_assert_eq!(x == i, x == big);
        prop_assert_eq!(x.cmp_magnitude(&i), x.cmp_abs(&big));
    }

    #[test]
    fn mixed_dispatch_wide(x in arb_integer(), w in any::<i128>()) {
        let big = Integer::from(w);
        prop_assert_eq!(&x + w, &x + &big);
        prop_assert_eq!(&x * w, &x * &big);
        prop_assert_eq!(x.partial_cmp(&w), Some(x.cmp(&big)));
    }

    #[test]
    fn native_round_trip(n in any::<i128>()) {
        let i = Integer::from(n);
        prop_assert_eq!(i.to_native::<i128>(), Ok(n));
        prop_assert_eq!(to_oracle(&i), BigInt::from(n));
        let fits = i64::try_from(n).ok();
        prop_assert_eq!(i.to_native::<i64>().ok(), fits);
        prop_assert_eq!(i.to_i64_wrapping(), n as i64);
    }

    #[test]
    fn text_round_trip(v in arb_integer(), radix in 2i32..=62) {
        let s = v.to_string_radix(radix);
        prop_assert_eq!(Integer::from_str_radix(&s, radix).unwrap(), v.clone());
        prop_assert_eq!(v.digit_count(radix), s.trim_start_matches('-').len());
    }

    #[test]
    fn sign_matches_oracle(v in arb_integer()) {
        let expected = match to_oracle(&v).cmp(&BigInt::from(0)) {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        };
        prop_assert_eq!(v.sign(), expected);
    }
}
