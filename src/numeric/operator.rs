// ============================================================================
// Operator
// Closed set of binary operators and their symbol tables
// ============================================================================

use super::errors::ArithmeticError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary operator awaiting (or applied to) a right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Normalize an operator spelling.
    ///
    /// Accepts the ASCII keys `+ - * /`, the locale glyphs `× ÷` and the
    /// presentation minus `−` (U+2212). Surrounding whitespace is ignored.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Operator::Add),
            "-" | "\u{2212}" => Some(Operator::Sub),
            "*" | "×" => Some(Operator::Mul),
            "/" | "÷" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Symbol shown in the secondary (pending expression) text.
    pub fn display_symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "\u{2212}",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }

    /// Plain ASCII key for this operator.
    pub fn ascii_symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or(ArithmeticError::InvalidOperator)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_symbol())
    }
}
