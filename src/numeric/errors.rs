// ============================================================================
// Numeric Errors
// Failure variants for evaluation, parsing and display formatting
// ============================================================================

use std::fmt;

/// Errors that can occur while evaluating, parsing or formatting a value.
///
/// None of these ever cross the engine's public key-press API: the engine
/// converts them into its error state at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// Right-hand operand of a division was zero
    DivisionByZero,
    /// Value cannot be represented or does not fit the display bound
    Overflow,
    /// Operator spelling is not one of the accepted symbols
    InvalidOperator,
    /// Entry text is not a numeric literal
    InvalidEntry,
    /// Rounding precision outside what a number can carry
    InvalidPrecision(usize),
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
            ArithmeticError::Overflow => {
                write!(f, "overflow: value cannot be displayed within the bound")
            },
            ArithmeticError::InvalidOperator => write!(f, "invalid operator symbol"),
            ArithmeticError::InvalidEntry => write!(f, "invalid entry: not a numeric literal"),
            ArithmeticError::InvalidPrecision(p) => {
                write!(f, "invalid precision: {} significant digits", p)
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for numeric operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
