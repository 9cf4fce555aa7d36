// ============================================================================
// Calculator Engine Library
// Keystroke-driven calculator state machine with exact decimal arithmetic
// ============================================================================

//! # Calculator Engine
//!
//! A presentation-independent calculator engine. A user interface forwards
//! normalized keystrokes and reads back two strings after every event: the
//! main display and the pending-expression hint.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** (`0.1 + 0.2 = 0.3`) at a configurable
//!   working precision
//! - **Left-to-right chaining** of pending operations and **repeat equals**
//! - **Bounded display formatting** with rounding-to-fit and overflow detection
//! - **Soft error recovery**: typing after an error starts over
//! - **Pluggable event handlers** for logging and observation
//!
//! ## Example
//!
//! ```rust
//! use calc_engine::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//!
//! for key in ["1", "0", "+", "2", "-", "3", "="] {
//!     engine.press(key.parse::<Key>().unwrap());
//! }
//!
//! assert_eq!(engine.get_display(), "9");
//! assert_eq!(engine.get_secondary(), "");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConfigError, EngineConfig, EngineSnapshot, ErrorKind, Key, UnknownKey,
    };
    pub use crate::engine::{create_from_config, CalculatorEngine, CalculatorEngineBuilder};
    pub use crate::interfaces::{
        EngineEvent, EventHandler, IgnoreReason, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{ArithmeticError, DisplayFormatter, Evaluator, Number, Operator};
    pub use crate::utils::compact_display;
}
