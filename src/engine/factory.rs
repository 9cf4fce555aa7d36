// ============================================================================
// Engine Factory
// Creates calculator engines from validated configuration
// ============================================================================

use crate::domain::config::{ConfigError, EngineConfig};
use crate::engine::CalculatorEngine;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator engine from configuration
///
/// # Arguments
/// * `config` - Display bound, precision and sentinel tokens
/// * `event_handler` - Observer for engine events
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
/// use std::sync::Arc;
///
/// let config = EngineConfig::pocket();
/// let engine = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(engine.get_display(), "0");
/// ```
pub fn create_from_config(
    config: EngineConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<CalculatorEngine, ConfigError> {
    config.validate()?;

    tracing::debug!(
        max_display_len = config.max_display_len,
        precision = config.precision,
        "creating calculator engine"
    );

    Ok(CalculatorEngine::from_parts(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculator engines with fluent API
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
/// use std::sync::Arc;
///
/// let mut engine = CalculatorEngineBuilder::new()
///     .max_display_len(16)
///     .precision(12)
///     .error_token("Erro")
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// engine.press_digit(1);
/// engine.press_operator("÷");
/// engine.press_digit(0);
/// engine.press_equals();
/// assert_eq!(engine.get_display(), "Erro");
/// ```
pub struct CalculatorEngineBuilder {
    config: EngineConfig,
}

impl CalculatorEngineBuilder {
    /// Create a builder starting from the default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Apply the desktop preset
    pub fn desktop() -> Self {
        Self::from_config(EngineConfig::desktop())
    }

    /// Apply the pocket preset
    pub fn pocket() -> Self {
        Self::from_config(EngineConfig::pocket())
    }

    /// Set the maximum display length
    pub fn max_display_len(mut self, len: usize) -> Self {
        self.config.max_display_len = len;
        self
    }

    /// Set the working precision in significant digits
    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    /// Set the division-by-zero sentinel
    pub fn error_token(mut self, token: impl Into<String>) -> Self {
        self.config.error_token = token.into();
        self
    }

    /// Set the overflow sentinel
    pub fn overflow_token(mut self, token: impl Into<String>) -> Self {
        self.config.overflow_token = token.into();
        self
    }

    /// Build the calculator engine
    pub fn build(
        self,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<CalculatorEngine, ConfigError> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for CalculatorEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
