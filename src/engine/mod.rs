// ============================================================================
// Engine Module
// Contains the calculator engine state machine
// ============================================================================

mod calculator_engine;
mod entry;
mod pending;

pub mod factory;

pub use calculator_engine::CalculatorEngine;
pub use factory::{create_from_config, CalculatorEngineBuilder};
