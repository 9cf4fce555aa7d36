// ============================================================================
// Display Formatter
// Renders exact decimals as bounded fixed-point display strings
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use super::number::Number;
use dec::Rounding;

/// Each rounding pass can carry into the integer part at most once, so a
/// handful of attempts is always enough.
const MAX_ROUNDING_ATTEMPTS: usize = 6;

/// Formats computed values for a display of bounded width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormatter {
    max_len: usize,
}

impl DisplayFormatter {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// Maximum number of characters a formatted value may occupy.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Render `value` in plain fixed-point notation within the bound.
    ///
    /// Zero is always `"0"`. Trailing fractional zeros are dropped. When the
    /// rendering is too wide, the fraction is rounded half-up to the number of
    /// digits that still fit.
    ///
    /// # Errors
    /// Returns `Overflow` when the sign and integer part alone exceed the bound.
    pub fn format(&self, value: Number) -> ArithmeticResult<String> {
        if !value.is_finite() {
            return Err(ArithmeticError::Overflow);
        }

        let rendered = value.to_plain_string();
        if rendered.len() <= self.max_len {
            return Ok(rendered);
        }

        // A huge integer has no fraction left to trim
        if !rendered.contains('.') {
            return Err(ArithmeticError::Overflow);
        }

        let mut value = value;
        for _ in 0..MAX_ROUNDING_ATTEMPTS {
            let rendered = value.to_plain_string();
            let (sign, unsigned) = match rendered.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("", rendered.as_str()),
            };
            let int_part = unsigned.split('.').next().unwrap_or("0");

            if sign.len() + int_part.len() > self.max_len {
                return Err(ArithmeticError::Overflow);
            }

            let allowed_frac = self.max_len - sign.len() - int_part.len();
            if allowed_frac <= 1 {
                // No room for the point plus a digit
                if int_part.bytes().all(|b| b == b'0') {
                    return Ok("0".to_string());
                }
                return Ok(format!("{}{}", sign, int_part));
            }

            value = value.round_to_places(allowed_frac - 1, Rounding::HalfUp)?;

            let rendered = value.to_plain_string();
            if rendered.len() <= self.max_len {
                return Ok(rendered);
            }
        }

        Err(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        s.parse().unwrap()
    }

    #[test]
    fn test_zero_never_negative() {
        let fmt = DisplayFormatter::new(32);
        assert_eq!(fmt.format(Number::zero()).unwrap(), "0");
        assert_eq!(fmt.format(num("-0")).unwrap(), "0");
        assert_eq!(fmt.format(num("-0.000")).unwrap(), "0");
    }

    #[test]
    fn test_strips_trailing_zeros() {
        let fmt = DisplayFormatter::new(32);
        assert_eq!(fmt.format(num("12.500")).unwrap(), "12.5");
        assert_eq!(fmt.format(num("4.000")).unwrap(), "4");
        assert_eq!(fmt.format(num("100")).unwrap(), "100");
        assert_eq!(fmt.format(num("-0.25")).unwrap(), "-0.25");
    }

    #[test]
    fn test_never_scientific() {
        let fmt = DisplayFormatter::new(32);
        assert_eq!(fmt.format(num("1E+30")).unwrap(), format!("1{}", "0".repeat(30)));
        assert_eq!(fmt.format(num("1E-30")).unwrap(), format!("0.{}1", "0".repeat(29)));
    }

    #[test]
    fn test_rounds_fraction_to_fit() {
        let fmt = DisplayFormatter::new(8);
        // 1.23456789 -> 6 fractional digits fit
        assert_eq!(fmt.format(num("1.23456789")).unwrap(), "1.234568");
        assert_eq!(fmt.format(num("-1.23456789")).unwrap(), "-1.23457");
        // Half-up, not half-even
        assert_eq!(fmt.format(num("0.1234565")).unwrap(), "0.123457");
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        let fmt = DisplayFormatter::new(8);
        assert_eq!(fmt.format(num("1E-40")).unwrap(), "0");
        assert_eq!(fmt.format(num("-1E-40")).unwrap(), "0");

        let narrow = DisplayFormatter::new(3);
        assert_eq!(narrow.format(num("-0.5")).unwrap(), "0");
    }

    #[test]
    fn test_rounding_strips_new_trailing_zeros() {
        let fmt = DisplayFormatter::new(6);
        assert_eq!(fmt.format(num("1.9999999")).unwrap(), "2");
    }

    #[test]
    fn test_integer_only_when_no_room_for_fraction() {
        let fmt = DisplayFormatter::new(5);
        assert_eq!(fmt.format(num("1234.56")).unwrap(), "1234");
        assert_eq!(fmt.format(num("12345.6")).unwrap(), "12345");
    }

    #[test]
    fn test_integer_overflow() {
        let fmt = DisplayFormatter::new(5);
        assert_eq!(fmt.format(num("123456")), Err(ArithmeticError::Overflow));
        assert_eq!(fmt.format(num("-12345")), Err(ArithmeticError::Overflow));
        assert_eq!(fmt.format(num("123456.7")), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_bound_is_the_only_overflow_limit() {
        let fmt = DisplayFormatter::new(32);
        let wide = "9".repeat(32);
        assert_eq!(fmt.format(num(&wide)).unwrap(), wide);
        assert_eq!(fmt.format(num(&"9".repeat(33))), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_fits_default_bound() {
        let fmt = DisplayFormatter::new(32);
        let third = num("0.3333333333333333333333333333");
        assert_eq!(fmt.format(third).unwrap(), "0.3333333333333333333333333333");
    }
}
