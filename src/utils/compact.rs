// ============================================================================
// Display Compaction
// Cosmetic shortening of display text for narrow screens
// ============================================================================

use crate::numeric::parse_entry;

/// Significant digits kept when a long value is shortened
pub const COMPACT_SIGNIFICANT_DIGITS: usize = 10;

/// Mantissa digits after the point in scientific notation
const SCIENTIFIC_FRACTION_DIGITS: usize = 6;

/// Shorten `text` to at most `max_len` characters for rendering only.
///
/// Text that already fits, and any of the `sentinels`, is returned unchanged.
/// Longer numbers are first rounded to ten significant digits, then shown in
/// scientific notation, and as a last resort cut off.
pub fn compact_display(text: &str, max_len: usize, sentinels: &[&str]) -> String {
    if text.chars().count() <= max_len || sentinels.contains(&text) {
        return text.to_string();
    }

    if let Ok(value) = parse_entry(text) {
        if let Ok(rounded) = value.round_significant(COMPACT_SIGNIFICANT_DIGITS) {
            let plain = rounded.to_plain_string();
            if plain.len() <= max_len {
                return plain;
            }
        }

        if let Ok(rounded) = value.round_significant(SCIENTIFIC_FRACTION_DIGITS + 1) {
            let scientific = scientific(&rounded.to_plain_string());
            if scientific.len() <= max_len {
                return scientific;
            }
        }
    }

    text.chars().take(max_len).collect()
}

/// Rewrite plain decimal text as `d.dddddde<exp>`.
fn scientific(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let int_len = unsigned.split('.').next().map_or(0, str::len) as i64;

    let digits: String = unsigned.chars().filter(char::is_ascii_digit).collect();
    let leading_zeros = digits.len() - digits.trim_start_matches('0').len();
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return "0".to_string();
    }

    let exponent = int_len - 1 - leading_zeros as i64;
    let mut mantissa: String = significant
        .chars()
        .chain(std::iter::repeat('0'))
        .take(SCIENTIFIC_FRACTION_DIGITS + 1)
        .collect();
    mantissa.insert(1, '.');

    format!("{}{}e{}", sign, mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTINELS: &[&str] = &["Error", "Overflow"];

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(compact_display("42", 18, SENTINELS), "42");
        assert_eq!(compact_display("-0.5", 4, SENTINELS), "-0.5");
    }

    #[test]
    fn test_sentinels_untouched() {
        assert_eq!(compact_display("Overflow", 4, SENTINELS), "Overflow");
    }

    #[test]
    fn test_rounds_long_fraction() {
        assert_eq!(
            compact_display("0.3333333333333333333333333333", 18, SENTINELS),
            "0.3333333333"
        );
    }

    #[test]
    fn test_scientific_for_large_integers() {
        assert_eq!(
            compact_display("12345678901234567890", 18, SENTINELS),
            "1.234568e19"
        );
    }

    #[test]
    fn test_scientific_for_tiny_values() {
        let tiny = format!("-0.{}123456789", "0".repeat(25));
        assert_eq!(compact_display(&tiny, 14, SENTINELS), "-1.234568e-26");
    }

    #[test]
    fn test_truncates_as_last_resort() {
        assert_eq!(compact_display("not a number at all", 5, SENTINELS), "not a");
    }
}
