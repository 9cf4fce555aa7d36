// ============================================================================
// Engine State
// The single state record owned by a calculator engine
// ============================================================================

use crate::numeric::{Number, Operator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which sentinel the display is showing while in error mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    DivisionByZero,
    Overflow,
}

/// Mutable state of one engine.
///
/// Owned exclusively by the engine; callers only ever see owned copies of its
/// string projections through [`EngineSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    /// Entry being edited, last result, or a sentinel token
    pub display_text: String,
    /// Pending expression hint such as `"10 +"`
    pub secondary_text: String,
    /// Left-hand operand of the pending operation
    pub stored_value: Option<Number>,
    /// Operator awaiting its right-hand operand
    pub pending_op: Option<Operator>,
    /// Next digit or point starts a fresh entry
    pub reset_next_entry: bool,
    /// Set while the display holds a sentinel
    pub error: Option<ErrorKind>,
    /// Operator of the last completed `=`
    pub last_op: Option<Operator>,
    /// Right-hand operand of the last completed `=`
    pub last_rhs: Option<Number>,
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            display_text: "0".to_string(),
            secondary_text: String::new(),
            stored_value: None,
            pending_op: None,
            reset_next_entry: false,
            error: None,
            last_op: None,
            last_rhs: None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// True when neither an operation is pending nor a left operand is stored
    #[inline]
    pub fn is_free(&self) -> bool {
        self.pending_op.is_none() && self.stored_value.is_none()
    }

    /// Drop the repeat-equals memory
    #[inline]
    pub fn disarm_repeat(&mut self) {
        self.last_op = None;
        self.last_rhs = None;
    }

    /// Check the structural invariants of the record.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.pending_op.is_some() != self.stored_value.is_some() {
            return Err("pending operator and stored value must be set together".to_string());
        }

        if self.is_error()
            && (self.stored_value.is_some()
                || self.last_op.is_some()
                || self.last_rhs.is_some()
                || !self.secondary_text.is_empty())
        {
            return Err("error state must not carry pending or repeat state".to_string());
        }

        if self.display_text.is_empty() {
            return Err("display text must never be empty".to_string());
        }

        if !self.is_error() {
            let unsigned = self
                .display_text
                .strip_prefix('-')
                .unwrap_or(&self.display_text);
            let int_part = unsigned.split('.').next().unwrap_or("");
            if int_part.len() > 1 && int_part.starts_with('0') {
                return Err(format!("leading zero run in {:?}", self.display_text));
            }
        }

        Ok(())
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned copy of what a presentation layer needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineSnapshot {
    pub display: String,
    pub secondary: String,
    pub is_error: bool,
}

#[cfg(feature = "serde")]
impl EngineSnapshot {
    /// Serialize for a history tape or a remote display
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&EngineState> for EngineSnapshot {
    fn from(state: &EngineState) -> Self {
        Self {
            display: state.display_text.clone(),
            secondary: state.secondary_text.clone(),
            is_error: state.is_error(),
        }
    }
}
