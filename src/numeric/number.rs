// ============================================================================
// Number
// Floating decimal value with an explicit rounding context per operation
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use dec::{Context, Decimal, Rounding};
use std::fmt;
use std::str::FromStr;

/// Coefficient units of three digits each
const UNITS: usize = 13;

/// Significant digits a [`Number`] carries exactly.
///
/// Wide enough that any typed entry on a 32-character display is held
/// without rounding.
pub const MAX_DIGITS: usize = UNITS * 3;

pub(crate) type RawDecimal = Decimal<UNITS>;

/// Build a context rounding to `precision` significant digits.
pub(crate) fn context(
    precision: usize,
    rounding: Rounding,
) -> ArithmeticResult<Context<RawDecimal>> {
    let mut cx = Context::<RawDecimal>::default();
    cx.set_precision(precision)
        .map_err(|_| ArithmeticError::InvalidPrecision(precision))?;
    cx.set_rounding(rounding);
    Ok(cx)
}

/// An exact decimal value.
///
/// The exponent floats, so magnitude is independent of precision:
/// `1E-30` and `999999999999998E+15` are both ordinary values.
#[derive(Clone, Copy)]
pub struct Number(RawDecimal);

impl Number {
    pub fn zero() -> Self {
        Number(RawDecimal::zero())
    }

    pub(crate) fn from_raw(raw: RawDecimal) -> Self {
        Number(raw)
    }

    pub(crate) fn raw(&self) -> &RawDecimal {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative() && !self.0.is_zero()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Plain fixed-point text: no exponent, no trailing fractional zeros,
    /// and zero of either sign as `"0"`.
    pub fn to_plain_string(&self) -> String {
        if self.0.is_zero() {
            return "0".to_string();
        }

        let mut reduced = self.0;
        if let Ok(mut cx) = context(MAX_DIGITS, Rounding::HalfEven) {
            cx.reduce(&mut reduced);
        }
        reduced.to_standard_notation_string()
    }

    /// Round to `places` fractional digits.
    ///
    /// # Errors
    /// Returns `Overflow` if the rounded value cannot be represented.
    pub fn round_to_places(&self, places: usize, rounding: Rounding) -> ArithmeticResult<Number> {
        let mut cx = context(MAX_DIGITS, rounding)?;
        let quantum = cx
            .parse(format!("1E-{}", places))
            .map_err(|_| ArithmeticError::Overflow)?;

        let mut rounded = self.0;
        cx.quantize(&mut rounded, &quantum);
        if !rounded.is_finite() {
            return Err(ArithmeticError::Overflow);
        }
        Ok(Number(rounded))
    }

    /// Round to `digits` significant digits and drop trailing zeros.
    pub fn round_significant(&self, digits: usize) -> ArithmeticResult<Number> {
        let mut cx = context(digits, Rounding::HalfEven)?;
        let mut rounded = self.0;
        cx.reduce(&mut rounded);
        Ok(Number(rounded))
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Number {
    type Err = ArithmeticError;

    /// Parse a decimal literal exactly (up to [`MAX_DIGITS`] digits).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cx = context(MAX_DIGITS, Rounding::HalfEven)?;
        let raw = cx.parse(s).map_err(|_| ArithmeticError::InvalidEntry)?;
        if !raw.is_finite() {
            return Err(ArithmeticError::InvalidEntry);
        }
        Ok(Number(raw))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.to_plain_string())
    }
}

/// Numeric equality: `1.50 == 1.5` and `-0 == 0`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.to_plain_string() == other.to_plain_string()
    }
}

impl Eq for Number {}

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Number {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
