// ============================================================================
// Calculator Engine
// Owns the state record and routes keystrokes to the entry accumulator and
// the pending-operation tracker
// ============================================================================

use crate::domain::{EngineConfig, EngineSnapshot, EngineState, ErrorKind, Key};
use crate::interfaces::{EngineEvent, EventHandler, IgnoreReason, NoOpEventHandler};
use crate::numeric::{
    parse_entry, ArithmeticError, ArithmeticResult, DisplayFormatter, Evaluator, Number,
};
use std::sync::Arc;

/// Keystroke-driven calculator engine.
///
/// Every `press_*` method runs to completion and reports nothing back; callers
/// read [`get_display`](Self::get_display) and
/// [`get_secondary`](Self::get_secondary) afterwards. Faults surface only as a
/// sentinel token in the display.
pub struct CalculatorEngine {
    /// Construction-time configuration
    pub(super) config: EngineConfig,

    /// Arithmetic at the configured working precision
    pub(super) evaluator: Evaluator,

    /// Result rendering within the display bound
    pub(super) formatter: DisplayFormatter,

    /// The single mutable state record
    pub(super) state: EngineState,

    /// Observer for engine events
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorEngine {
    /// Create an engine with the default configuration and no observer
    pub fn new() -> Self {
        Self::from_parts(EngineConfig::default(), Arc::new(NoOpEventHandler))
    }

    /// Build from an already validated configuration
    pub(crate) fn from_parts(config: EngineConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            evaluator: Evaluator::new(config.precision),
            formatter: DisplayFormatter::new(config.max_display_len),
            config,
            state: EngineState::new(),
            event_handler,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Main display text
    pub fn get_display(&self) -> String {
        self.state.display_text.clone()
    }

    /// Pending expression hint, empty when nothing is pending
    pub fn get_secondary(&self) -> String {
        self.state.secondary_text.clone()
    }

    /// Both display strings and the error flag in one copy
    pub fn get_snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::from(&self.state)
    }

    /// Get the engine configuration
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }

    /// True while the display holds a sentinel token
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Which sentinel is showing, if any
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.state.error
    }

    // ========================================================================
    // Key dispatch
    // ========================================================================

    /// Dispatch a normalized key to the matching `press_*` method
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::Decimal => self.press_decimal(),
            Key::Operator(op) => self.select_operator(op),
            Key::Equals => self.press_equals(),
            Key::Clear => self.press_clear(),
            Key::ClearEntry => self.press_clear_entry(),
            Key::Backspace => self.press_backspace(),
            Key::ToggleSign => self.press_toggle_sign(),
        }
    }

    /// C: full reset
    pub fn press_clear(&mut self) {
        self.reset();
    }

    // ========================================================================
    // Shared plumbing
    // ========================================================================

    /// Return to the initial state
    pub(super) fn reset(&mut self) {
        tracing::trace!("calculator engine reset");
        self.state = EngineState::new();
        self.emit(EngineEvent::Reset);
    }

    /// Show a sentinel and drop all pending and repeat state
    pub(super) fn enter_error(&mut self, kind: ErrorKind) {
        let token = match kind {
            ErrorKind::DivisionByZero => &self.config.error_token,
            ErrorKind::Overflow => &self.config.overflow_token,
        };

        tracing::debug!(?kind, "calculator engine entering error state");

        self.state.display_text = token.clone();
        self.state.secondary_text.clear();
        self.state.stored_value = None;
        self.state.pending_op = None;
        self.state.reset_next_entry = true;
        self.state.error = Some(kind);
        self.state.disarm_repeat();

        self.emit(EngineEvent::ErrorEntered { kind });
    }

    /// Convert an evaluator or formatter failure into error state
    pub(super) fn fail(&mut self, err: ArithmeticError) {
        let kind = match err {
            ArithmeticError::DivisionByZero => ErrorKind::DivisionByZero,
            // Display text is always a numeric literal outside error state and
            // precision is validated up front, so only overflow is reachable
            ArithmeticError::Overflow
            | ArithmeticError::InvalidEntry
            | ArithmeticError::InvalidOperator
            | ArithmeticError::InvalidPrecision(_) => ErrorKind::Overflow,
        };
        self.enter_error(kind);
    }

    /// Parse the display text as an operand
    pub(super) fn current_value(&self) -> ArithmeticResult<Number> {
        parse_entry(&self.state.display_text)
    }

    /// Disarm repeat-equals when no operation is pending
    pub(super) fn clear_repeat_if_free(&mut self) {
        if self.state.is_free() {
            self.state.disarm_repeat();
        }
    }

    /// Begin a fresh entry after an operator or `=`
    pub(super) fn start_new_entry_if_needed(&mut self) {
        if self.state.reset_next_entry {
            self.state.display_text = "0".to_string();
            self.state.reset_next_entry = false;
            self.clear_repeat_if_free();
        }
    }

    pub(super) fn ignore(&self, key: Key, reason: IgnoreReason) {
        tracing::trace!(%key, ?reason, "key ignored");
        self.emit(EngineEvent::KeyIgnored { key, reason });
    }

    pub(super) fn emit(&self, event: EngineEvent) {
        self.event_handler.on_event(event);
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &EngineState {
        &self.state
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Operator;
    use std::sync::Mutex;

    struct Collecting(Mutex<Vec<EngineEvent>>);

    impl EventHandler for Collecting {
        fn on_event(&self, event: EngineEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.get_display(), "0");
        assert_eq!(engine.get_secondary(), "");
        assert!(!engine.is_error());
        assert_eq!(engine.error_kind(), None);
    }

    #[test]
    fn test_press_dispatch() {
        let mut engine = CalculatorEngine::new();
        for key in ["6", "×", "7", "="] {
            engine.press(key.parse().unwrap());
        }
        assert_eq!(engine.get_display(), "42");
    }

    #[test]
    fn test_error_clears_pending_and_repeat() {
        let mut engine = CalculatorEngine::new();
        engine.press_digit(5);
        engine.select_operator(Operator::Add);
        engine.press_digit(2);
        engine.press_equals();
        engine.select_operator(Operator::Div);
        engine.press_digit(0);
        engine.press_equals();

        assert_eq!(engine.get_display(), "Error");
        assert_eq!(engine.get_secondary(), "");
        assert_eq!(engine.error_kind(), Some(ErrorKind::DivisionByZero));
        assert!(engine.state().check_invariants().is_ok());
        assert!(engine.state().last_op.is_none());
    }

    #[test]
    fn test_events_emitted() {
        let handler = Arc::new(Collecting(Mutex::new(Vec::new())));
        let mut engine = CalculatorEngine::from_parts(EngineConfig::default(), handler.clone());

        engine.press_digit(8);
        engine.select_operator(Operator::Div);
        engine.press_digit(2);
        engine.press_equals();
        engine.press_clear();

        let events = handler.0.lock().unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, EngineEvent::OperatorSelected { operator: Operator::Div, .. })));
        assert!(events.iter().any(|e| matches!(
            e,
            EngineEvent::Evaluated {
                repeated: false,
                ..
            }
        )));
        assert_eq!(events.last(), Some(&EngineEvent::Reset));
    }

    #[test]
    fn test_custom_tokens() {
        let config = EngineConfig::default()
            .with_error_token("Erro")
            .with_overflow_token("Estouro");
        let mut engine = CalculatorEngine::from_parts(config, Arc::new(NoOpEventHandler));

        engine.press_digit(1);
        engine.select_operator(Operator::Div);
        engine.press_digit(0);
        engine.press_equals();
        assert_eq!(engine.get_display(), "Erro");
    }
}
