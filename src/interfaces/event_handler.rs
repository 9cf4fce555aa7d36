// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator engine events
// ============================================================================

use crate::domain::{ErrorKind, Key};
use crate::numeric::{Number, Operator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a keystroke had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IgnoreReason {
    /// Key is inert while a sentinel is showing
    ErrorState,
    /// Entry already at the maximum display length
    DisplayFull,
    /// Entry already contains a decimal point
    DuplicateDecimal,
    /// Digit outside 0-9
    InvalidDigit,
    /// Nothing pending and nothing to repeat
    NothingToEvaluate,
}

/// Events emitted by the calculator engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineEvent {
    /// Key accepted but left the state untouched
    KeyIgnored { key: Key, reason: IgnoreReason },

    /// Operator now pending against `stored`
    OperatorSelected { operator: Operator, stored: Number },

    /// A binary operation completed
    Evaluated {
        lhs: Number,
        operator: Operator,
        rhs: Number,
        result: Number,
        /// True for a repeat-equals step
        repeated: bool,
    },

    /// Engine entered error state
    ErrorEntered { kind: ErrorKind },

    /// Engine returned to its initial state
    Reset,
}

/// Event handler trait for observing engine transitions.
/// Implementations can handle logging, metrics, history tapes, etc.
///
/// Handlers only observe; they never influence engine state.
pub trait EventHandler: Send + Sync {
    /// Handle an engine event
    fn on_event(&self, event: EngineEvent);
}

/// No-op event handler (default)
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: EngineEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: EngineEvent) {
        tracing::debug!("Calculator engine event: {:?}", event);
    }
}
