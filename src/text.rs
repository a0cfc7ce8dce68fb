//! Parsing from and rendering to text in bases 2 to 62.

use crate::error::ParseError;
use crate::integer::Integer;
use gmp_mpfr_sys::gmp;
use std::fmt;
use std::os::raw::c_ulong;
use std::str::FromStr;

// Digits above 36 are case sensitive: 'A'..='Z' are 10..=35 and 'a'..='z' are
// 36..=61. Up to base 36 both cases mean 10..=35.
fn is_digit(c: char, radix: i32) -> bool {
    let value = match c {
        '0'..='9' => c as i32 - '0' as i32,
        'A'..='Z' => c as i32 - 'A' as i32 + 10,
        'a'..='z' if radix <= 36 => c as i32 - 'a' as i32 + 10,
        'a'..='z' => c as i32 - 'a' as i32 + 36,
        _ => return false,
    };
    value < radix
}

fn detect_prefix(digits: &[u8]) -> Option<i32> {
    match digits {
        [b'0', b'x', ..] | [b'0', b'X', ..] => Some(16),
        [b'0', b'b', ..] | [b'0', b'B', ..] => Some(2),
        [b'0', b'o', ..] | [b'0', b'O', ..] => Some(8),
        _ => None,
    }
}

impl Integer {
    /// Parses `src` in `base`, where `base` is 0 or in `2..=62`.
    ///
    /// A leading `+` or `-` is accepted and underscores anywhere after it are
    /// skipped. Base 0 reads a `0x`, `0b` or `0o` prefix (either case) and
    /// falls back to decimal.
    ///
    /// ```
    /// use gmpint::Integer;
    ///
    /// assert_eq!(Integer::from_str_radix("0xff", 0).unwrap(), 255);
    /// assert_eq!(Integer::from_str_radix("-1_000", 10).unwrap(), -1000);
    /// assert!(Integer::from_str_radix("12", 1).is_err());
    /// ```
    pub fn from_str_radix(src: &str, base: i32) -> Result<Integer, ParseError> {
        if base != 0 && !(2..=62).contains(&base) {
            return Err(ParseError::InvalidBase(base));
        }
        let bytes = src.as_bytes();
        let (negative, mut start) = match bytes.first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };
        let mut radix = base;
        if base == 0 {
            radix = 10;
            if let Some(detected) = detect_prefix(&bytes[start..]) {
                radix = detected;
                start += 2;
            }
        }

        let mut digits = Vec::with_capacity(bytes.len() - start + 1);
        for (index, c) in src[start..].char_indices() {
            if c == '_' {
                continue;
            }
            if !is_digit(c, radix) {
                return Err(ParseError::InvalidDigit {
                    index: start + index,
                    digit: c,
                });
            }
            digits.push(c as u8);
        }
        if digits.is_empty() {
            return Err(ParseError::Empty);
        }
        digits.push(0);

        let mut i = Integer::new();
        let rc = unsafe { gmp::mpz_set_str(i.as_raw_mut(), digits.as_ptr().cast(), radix) };
        debug_assert_eq!(rc, 0);
        if negative {
            i.neg_mut();
        }
        Ok(i)
    }

    /// Renders the value in `radix`.
    ///
    /// `2..=62` uses lowercase letters up to base 36; `-36..=-2` renders in
    /// base `|radix|` with uppercase letters.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside both ranges.
    pub fn to_string_radix(&self, radix: i32) -> String {
        if !(2..=62).contains(&radix) && !(-36..=-2).contains(&radix) {
            panic!("to_string_radix: radix is {}, expected 2..=62 or -36..=-2", radix);
        }
        // room for a sign and the terminating NUL
        let len = unsafe { gmp::mpz_sizeinbase(self.as_raw(), radix.abs()) } + 2;
        let mut buf = vec![0u8; len];
        unsafe { gmp::mpz_get_str(buf.as_mut_ptr().cast(), radix, self.as_raw()) };
        let end = buf.iter().position(|&b| b == 0).unwrap_or(len);
        buf.truncate(end);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn magnitude_digits(&self, radix: i32) -> String {
        let mut s = self.to_string_radix(radix);
        if self.is_negative() {
            s.remove(0);
        }
        s
    }

    /// Exact number of digits of the magnitude in `base`; zero has one digit.
    ///
    /// # Panics
    ///
    /// Panics if `base` is not in `2..=62`.
    pub fn digit_count(&self, base: i32) -> usize {
        if !(2..=62).contains(&base) {
            panic!("digit_count: base is {}, expected 2..=62", base);
        }
        let n = unsafe { gmp::mpz_sizeinbase(self.as_raw(), base) };
        if base.count_ones() == 1 || n <= 1 {
            return n;
        }
        // the engine may overshoot by one for other bases
        let mut bound = Integer::new();
        unsafe { gmp::mpz_ui_pow_ui(bound.as_raw_mut(), base as c_ulong, (n - 1) as c_ulong) };
        if self.cmp_abs(&bound).is_lt() {
            n - 1
        } else {
            n
        }
    }
}

impl FromStr for Integer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Integer::from_str_radix(s, 0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_digits(10))
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_digits(16))
    }
}

impl fmt::UpperHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_digits(-16))
    }
}

impl fmt::Octal for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.magnitude_digits(8))
    }
}

impl fmt::Binary for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.magnitude_digits(2))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::Integer;

    #[test]
    fn parse_prefixes() {
        assert_eq!(Integer::from_str_radix("0xff", 0).unwrap(), 255);
        assert_eq!(Integer::from_str_radix("0XFF", 0).unwrap(), 255);
        assert_eq!(Integer::from_str_radix("-0b101", 0).unwrap(), -5);
        assert_eq!(Integer::from_str_radix("+0o17", 0).unwrap(), 15);
        assert_eq!(Integer::from_str_radix("0017", 0).unwrap(), 17);
        assert_eq!("42".parse::<Integer>().unwrap(), 42);
    }

    #[test]
    fn parse_underscores() {
        let i = Integer::from_str_radix("1_000_000_000_000_000_000_000", 10).unwrap();
        assert_eq!(i, 1_000_000_000_000_000_000_000u128);
        assert_eq!(Integer::from_str_radix("0x_ff_ff", 0).unwrap(), 0xffff);
        assert_eq!(Integer::from_str_radix("___", 10), Err(ParseError::Empty));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Integer::from_str_radix("10", 1), Err(ParseError::InvalidBase(1)));
        assert_eq!(Integer::from_str_radix("10", 63), Err(ParseError::InvalidBase(63)));
        assert_eq!(Integer::from_str_radix("", 10), Err(ParseError::Empty));
        assert_eq!(Integer::from_str_radix("-", 10), Err(ParseError::Empty));
        assert_eq!(Integer::from_str_radix("0x", 0), Err(ParseError::Empty));
        assert_eq!(
            Integer::from_str_radix("12a", 10),
            Err(ParseError::InvalidDigit { index: 2, digit: 'a' })
        );
        assert_eq!(
            Integer::from_str_radix("-12 3", 10),
            Err(ParseError::InvalidDigit { index: 3, digit: ' ' })
        );
        assert!(Integer::from_str_radix("12é", 10).is_err());
    }

    #[test]
    fn parse_case_by_base() {
        assert_eq!(Integer::from_str_radix("zZ", 36).unwrap(), 35 * 36 + 35);
        assert_eq!(Integer::from_str_radix("a", 62).unwrap(), 36);
        assert_eq!(Integer::from_str_radix("A", 62).unwrap(), 10);
        assert!(Integer::from_str_radix("z", 61).is_err());
    }

    #[test]
    fn render_radix() {
        let i = Integer::from(-255);
        assert_eq!(i.to_string_radix(16), "-ff");
        assert_eq!(i.to_string_radix(-16), "-FF");
        assert_eq!(Integer::new().to_string_radix(2), "0");
        assert_eq!(Integer::from(61).to_string_radix(62), "z");
        let big = Integer::from(u128::MAX);
        assert_eq!(big.to_string_radix(10), u128::MAX.to_string());
    }

    #[test]
    #[should_panic]
    fn render_bad_radix() {
        Integer::from(1).to_string_radix(-40);
    }

    #[test]
    fn digit_count_is_exact() {
        assert_eq!(Integer::new().digit_count(10), 1);
        assert_eq!(Integer::from(99).digit_count(10), 2);
        assert_eq!(Integer::from(100).digit_count(10), 3);
        assert_eq!(Integer::from(-999).digit_count(10), 3);
        assert_eq!(Integer::from(1000).digit_count(10), 4);
        assert_eq!(Integer::from(255).digit_count(16), 2);
        assert_eq!(Integer::from(256).digit_count(2), 9);
        for k in 1..40u32 {
            let p = Integer::small_pow(3, k);
            assert_eq!(p.digit_count(3), k as usize + 1);
            assert_eq!((p - 1u32).digit_count(3), k as usize);
        }
    }

    #[test]
    fn formatting_traits() {
        let i = Integer::from(-255);
        assert_eq!(format!("{}", i), "-255");
        assert_eq!(format!("{:?}", i), "-255");
        assert_eq!(format!("{:x}", i), "-ff");
        assert_eq!(format!("{:#X}", i), "-0xFF");
        assert_eq!(format!("{:o}", Integer::from(8)), "10");
        assert_eq!(format!("{:#b}", Integer::from(5)), "0b101");
        assert_eq!(format!("{:+}", Integer::from(7)), "+7");
        assert_eq!(format!("{:>6}", Integer::from(-42)), "   -42");
        assert_eq!(format!("{:06}", Integer::from(-42)), "-00042");
    }

    #[test]
    fn display_round_trips() {
        let i = Integer::from(i128::MIN) * 3u32;
        assert_eq!(i.to_string().parse::<Integer>().unwrap(), i);
    }
}
