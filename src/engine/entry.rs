// ============================================================================
// Entry Accumulator
// Digit, decimal point, backspace, sign and clear-entry edits of the display
// ============================================================================

use super::calculator_engine::CalculatorEngine;
use crate::domain::Key;
use crate::interfaces::IgnoreReason;

impl CalculatorEngine {
    /// Type a digit 0-9. Values above 9 are ignored.
    ///
    /// Typing while an error is showing starts over from a clean state.
    /// Keystrokes beyond the display bound are dropped silently.
    pub fn press_digit(&mut self, digit: u8) {
        if digit > 9 {
            self.ignore(Key::Digit(digit), IgnoreReason::InvalidDigit);
            return;
        }

        if self.state.is_error() {
            self.reset();
        }

        self.start_new_entry_if_needed();

        let text = &mut self.state.display_text;
        if text.as_str() != "0" && text.len() >= self.config.max_display_len {
            self.ignore(Key::Digit(digit), IgnoreReason::DisplayFull);
            return;
        }

        let ch = char::from(b'0' + digit);
        match text.as_str() {
            "0" => *text = ch.to_string(),
            "-0" => *text = format!("-{}", ch),
            _ => text.push(ch),
        }
    }

    /// Insert the decimal point, once per entry
    pub fn press_decimal(&mut self) {
        if self.state.is_error() {
            self.reset();
        }

        self.start_new_entry_if_needed();

        if self.state.display_text.contains('.') {
            self.ignore(Key::Decimal, IgnoreReason::DuplicateDecimal);
            return;
        }

        if self.state.display_text.len() >= self.config.max_display_len {
            self.ignore(Key::Decimal, IgnoreReason::DisplayFull);
            return;
        }

        self.state.display_text.push('.');
    }

    /// Remove the last typed character.
    ///
    /// Inert while an error is showing; only digits, sign toggle and the
    /// clear keys recover from it.
    pub fn press_backspace(&mut self) {
        if self.state.is_error() {
            self.ignore(Key::Backspace, IgnoreReason::ErrorState);
            return;
        }

        self.clear_repeat_if_free();
        self.start_new_entry_if_needed();

        let text = &mut self.state.display_text;
        if text.as_str() == "0" {
            return;
        }

        text.pop();
        if matches!(text.as_str(), "" | "-" | "-0") {
            *text = "0".to_string();
        }
    }

    /// ±: negate the current entry. Zero in any spelling stays unsigned.
    pub fn press_toggle_sign(&mut self) {
        if self.state.is_error() {
            self.reset();
        }

        self.clear_repeat_if_free();
        self.start_new_entry_if_needed();

        let is_zero = self
            .current_value()
            .map(|value| value.is_zero())
            .unwrap_or(false);
        if is_zero {
            return;
        }

        if let Some(unsigned) = self.state.display_text.strip_prefix('-') {
            self.state.display_text = unsigned.to_string();
        } else if self.state.display_text.len() + 1 > self.config.max_display_len {
            self.ignore(Key::ToggleSign, IgnoreReason::DisplayFull);
        } else {
            self.state.display_text.insert(0, '-');
        }
    }

    /// CE: reset the current entry to zero, keeping any pending operation
    pub fn press_clear_entry(&mut self) {
        if self.state.is_error() {
            self.reset();
            return;
        }

        self.clear_repeat_if_free();

        self.state.display_text = "0".to_string();
        self.state.reset_next_entry = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::EngineConfig;
    use crate::engine::CalculatorEngineBuilder;
    use crate::engine::CalculatorEngine;
    use crate::interfaces::NoOpEventHandler;
    use std::sync::Arc;

    fn type_text(engine: &mut CalculatorEngine, text: &str) {
        for ch in text.chars() {
            match ch {
                '0'..='9' => engine.press_digit(ch as u8 - b'0'),
                '.' => engine.press_decimal(),
                _ => panic!("unexpected character {:?}", ch),
            }
        }
    }

    #[test]
    fn test_leading_zero_rules() {
        let mut engine = CalculatorEngine::new();
        type_text(&mut engine, "00");
        assert_eq!(engine.get_display(), "0");

        engine.press_clear();
        type_text(&mut engine, "05");
        assert_eq!(engine.get_display(), "5");

        engine.press_clear();
        type_text(&mut engine, "123");
        assert_eq!(engine.get_display(), "123");
    }

    #[test]
    fn test_decimal_entry() {
        let mut engine = CalculatorEngine::new();
        engine.press_decimal();
        assert_eq!(engine.get_display(), "0.");
        engine.press_digit(5);
        assert_eq!(engine.get_display(), "0.5");
    }

    #[test]
    fn test_ignore_second_decimal_point() {
        let mut engine = CalculatorEngine::new();
        type_text(&mut engine, "1.2.3");
        assert_eq!(engine.get_display(), "1.23");
    }

    #[test]
    fn test_invalid_digit_ignored() {
        let mut engine = CalculatorEngine::new();
        engine.press_digit(4);
        engine.press_digit(10);
        assert_eq!(engine.get_display(), "4");
    }

    #[test]
    fn test_backspace() {
        let mut engine = CalculatorEngine::new();
        type_text(&mut engine, "45");
        engine.press_backspace();
        assert_eq!(engine.get_display(), "4");
        engine.press_backspace();
        assert_eq!(engine.get_display(), "0");
        engine.press_backspace();
        assert_eq!(engine.get_display(), "0");
    }

    #[test]
    fn test_backspace_collapses_negative_zero() {
        let mut engine = CalculatorEngine::new();
        type_text(&mut engine, "0.5");
        engine.press_toggle_sign();
        assert_eq!(engine.get_display(), "-0.5");
        engine.press_backspace();
        assert_eq!(engine.get_display(), "-0.");
        engine.press_backspace();
        assert_eq!(engine.get_display(), "0");

        engine.press_clear();
        engine.press_digit(7);
        engine.press_toggle_sign();
        engine.press_backspace();
        assert_eq!(engine.get_display(), "0");
    }

    #[test]
    fn test_toggle_sign() {
        let mut engine = CalculatorEngine::new();
        engine.press_digit(9);
        engine.press_toggle_sign();
        assert_eq!(engine.get_display(), "-9");
        engine.press_toggle_sign();
        assert_eq!(engine.get_display(), "9");
    }

    #[test]
    fn test_toggle_sign_on_zero_is_noop() {
        let mut engine = CalculatorEngine::new();
        engine.press_toggle_sign();
        assert_eq!(engine.get_display(), "0");

        engine.press_decimal();
        engine.press_toggle_sign();
        assert_eq!(engine.get_display(), "0.");

        engine.press_digit(0);
        engine.press_toggle_sign();
        assert_eq!(engine.get_display(), "0.0");
    }

    #[test]
    fn test_typing_past_bound_is_dropped() {
        let mut engine = CalculatorEngine::new();
        for _ in 0..200 {
            engine.press_digit(9);
        }
        let display = engine.get_display();
        assert_eq!(display, "9".repeat(32));
        assert!(!engine.is_error());

        engine.press_decimal();
        assert_eq!(engine.get_display(), display);
    }

    #[test]
    fn test_toggle_sign_respects_bound() {
        let mut engine = CalculatorEngineBuilder::new()
            .max_display_len(4)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        type_text(&mut engine, "1234");
        engine.press_toggle_sign();
        assert_eq!(engine.get_display(), "1234");

        engine.press_backspace();
        engine.press_toggle_sign();
        assert_eq!(engine.get_display(), "-123");
        // Full again: no more digits
        engine.press_digit(4);
        assert_eq!(engine.get_display(), "-123");
    }

    #[test]
    fn test_clear_entry_keeps_pending_operation() {
        let mut engine = CalculatorEngine::new();
        type_text(&mut engine, "12");
        engine.press_operator("+");
        engine.press_digit(7);
        engine.press_clear_entry();
        assert_eq!(engine.get_display(), "0");
        assert_eq!(engine.get_secondary(), "12 +");
        engine.press_digit(5);
        engine.press_equals();
        assert_eq!(engine.get_display(), "17");
    }

    #[test]
    fn test_pocket_bound() {
        let mut engine = CalculatorEngineBuilder::from_config(EngineConfig::pocket())
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        type_text(&mut engine, "12345678901234");
        assert_eq!(engine.get_display(), "123456789012");
    }
}
