// ============================================================================
// Numeric Module
// Exact decimal arithmetic and display formatting for the calculator engine
// ============================================================================
//
// This module provides:
// - Number: floating decimal value with an explicit rounding context
// - Operator: closed enum of binary operators with symbol tables
// - Evaluator: applies operators at an explicit working precision
// - DisplayFormatter: bounded fixed-point rendering with rounding-to-fit
// - ArithmeticError: failure variants consumed by the engine
//
// Design principles:
// - No binary floating-point operations
// - All fallible operations return Result (no panics)
// - Precision and display bound are values, never global state

mod errors;
mod evaluator;
mod formatter;
mod number;
mod operator;

pub use errors::{ArithmeticError, ArithmeticResult};
pub use evaluator::{parse_entry, Evaluator, MAX_PRECISION};
pub use formatter::DisplayFormatter;
pub use number::{Number, MAX_DIGITS};
pub use operator::Operator;
