// ============================================================================
// Arithmetic Evaluator
// Exact decimal arithmetic at an explicit working precision
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use super::number::{context, Number};
use super::operator::Operator;
use dec::Rounding;

/// Largest working precision an engine may be configured with.
pub const MAX_PRECISION: u32 = 34;

/// Applies binary operators to exact decimals.
///
/// The working precision is owned by the evaluator instead of a process-wide
/// context, so engines with different precisions never interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    precision: u32,
}

impl Evaluator {
    /// Create an evaluator rounding every result to `precision` significant digits.
    ///
    /// Precision is clamped to `1..=MAX_PRECISION`; configuration validation
    /// rejects out-of-range values before an engine is ever built.
    pub fn new(precision: u32) -> Self {
        Self {
            precision: precision.clamp(1, MAX_PRECISION),
        }
    }

    /// Working precision in significant digits.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Apply `op` to `lhs` and `rhs`, rounding half-even to the working precision.
    ///
    /// Operands are used exactly; only the result is rounded.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is division and `rhs` is zero
    /// - `Overflow` if the exponent leaves the representable range
    pub fn apply(&self, lhs: Number, op: Operator, rhs: Number) -> ArithmeticResult<Number> {
        if op == Operator::Div && rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let mut cx = context(self.precision as usize, Rounding::HalfEven)?;
        let mut result = *lhs.raw();
        match op {
            Operator::Add => cx.add(&mut result, rhs.raw()),
            Operator::Sub => cx.sub(&mut result, rhs.raw()),
            Operator::Mul => cx.mul(&mut result, rhs.raw()),
            Operator::Div => cx.div(&mut result, rhs.raw()),
        };

        if !result.is_finite() {
            return Err(ArithmeticError::Overflow);
        }
        Ok(Number::from_raw(result))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(28)
    }
}

/// Parse entry text into an exact decimal.
///
/// Accepts accumulation forms such as `"12."`, `"-0."`, `"."` and `"-"`
/// (the incomplete ones read as zero) and `,` as an alias for `.`.
///
/// # Errors
/// Returns `InvalidEntry` if the text is not a plain numeric literal.
pub fn parse_entry(text: &str) -> ArithmeticResult<Number> {
    let normalized = text.trim().replace(',', ".");
    let mut t = normalized.as_str();

    if let Some(stripped) = t.strip_suffix('.') {
        t = stripped;
    }

    let (negative, digits) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t),
    };

    if digits.is_empty() {
        return Ok(Number::zero());
    }

    // Exponents, infinities and NaN are not entries
    let well_formed = digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1
        && digits.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(ArithmeticError::InvalidEntry);
    }

    let literal = if digits.starts_with('.') {
        format!("{}0{}", if negative { "-" } else { "" }, digits)
    } else {
        format!("{}{}", if negative { "-" } else { "" }, digits)
    };

    literal.parse()
}
