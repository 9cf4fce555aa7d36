// ============================================================================
// Pending-Operation Tracker
// Operator selection, left-to-right chaining and (repeat) equals
// ============================================================================

use super::calculator_engine::CalculatorEngine;
use crate::domain::Key;
use crate::interfaces::{EngineEvent, IgnoreReason};
use crate::numeric::Operator;

impl CalculatorEngine {
    /// Select an operator by spelling: `+ - * /`, `×`, `÷` or `−`.
    ///
    /// Unknown spellings are ignored.
    pub fn press_operator(&mut self, symbol: &str) {
        match Operator::from_symbol(symbol) {
            Some(op) => self.select_operator(op),
            None => tracing::trace!(symbol, "unrecognized operator symbol ignored"),
        }
    }

    /// Make `op` the pending operator.
    ///
    /// If an operation is already pending and a new operand was typed since,
    /// it is evaluated first and its result becomes the left operand.
    pub fn select_operator(&mut self, op: Operator) {
        if self.state.is_error() {
            self.ignore(Key::Operator(op), IgnoreReason::ErrorState);
            return;
        }

        let current = match self.current_value() {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };

        if let (Some(pending), Some(stored)) = (self.state.pending_op, self.state.stored_value) {
            if !self.state.reset_next_entry {
                let result = match self.evaluator.apply(stored, pending, current) {
                    Ok(result) => result,
                    Err(err) => return self.fail(err),
                };
                let text = match self.formatter.format(result) {
                    Ok(text) => text,
                    Err(err) => return self.fail(err),
                };

                tracing::trace!(%stored, %pending, %current, %result, "chained evaluation");
                self.emit(EngineEvent::Evaluated {
                    lhs: stored,
                    operator: pending,
                    rhs: current,
                    result,
                    repeated: false,
                });

                self.state.stored_value = Some(result);
                self.state.display_text = text;
            }
        }

        let stored = *self.state.stored_value.get_or_insert(current);
        self.state.pending_op = Some(op);

        let stored_text = match self.formatter.format(stored) {
            Ok(text) => text,
            Err(err) => return self.fail(err),
        };
        self.state.secondary_text = format!("{} {}", stored_text, op.display_symbol());
        self.state.reset_next_entry = true;

        self.emit(EngineEvent::OperatorSelected {
            operator: op,
            stored,
        });
    }

    /// `=`: complete the pending operation, or repeat the last one.
    ///
    /// Right after an operator the stored value doubles as the right operand,
    /// so `5 + =` gives `10`. With nothing pending, the last completed
    /// operator and right operand are reapplied to the current display value.
    pub fn press_equals(&mut self) {
        if self.state.is_error() {
            self.ignore(Key::Equals, IgnoreReason::ErrorState);
            return;
        }

        if let (Some(op), Some(stored)) = (self.state.pending_op, self.state.stored_value) {
            let rhs = if self.state.reset_next_entry {
                stored
            } else {
                match self.current_value() {
                    Ok(value) => value,
                    Err(err) => return self.fail(err),
                }
            };

            let result = match self.evaluator.apply(stored, op, rhs) {
                Ok(result) => result,
                Err(err) => return self.fail(err),
            };
            let text = match self.formatter.format(result) {
                Ok(text) => text,
                Err(err) => return self.fail(err),
            };

            self.state.display_text = text;
            self.state.secondary_text.clear();
            self.state.last_op = Some(op);
            self.state.last_rhs = Some(rhs);
            self.state.stored_value = None;
            self.state.pending_op = None;
            self.state.reset_next_entry = true;

            self.emit(EngineEvent::Evaluated {
                lhs: stored,
                operator: op,
                rhs,
                result,
                repeated: false,
            });
            return;
        }

        if let (Some(op), Some(rhs)) = (self.state.last_op, self.state.last_rhs) {
            let lhs = match self.current_value() {
                Ok(value) => value,
                Err(err) => return self.fail(err),
            };
            let result = match self.evaluator.apply(lhs, op, rhs) {
                Ok(result) => result,
                Err(err) => return self.fail(err),
            };
            let text = match self.formatter.format(result) {
                Ok(text) => text,
                Err(err) => return self.fail(err),
            };

            self.state.display_text = text;
            self.state.secondary_text.clear();
            self.state.reset_next_entry = true;

            self.emit(EngineEvent::Evaluated {
                lhs,
                operator: op,
                rhs,
                result,
                repeated: true,
            });
            return;
        }

        self.ignore(Key::Equals, IgnoreReason::NothingToEvaluate);
    }
}
