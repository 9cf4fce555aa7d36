// ============================================================================
// Engine Configuration
// Display bound, working precision and sentinel tokens, fixed at construction
// ============================================================================

use crate::numeric::{parse_entry, MAX_PRECISION};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maximum display length in characters
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 32;

/// Default working precision in significant digits
pub const DEFAULT_PRECISION: u32 = 28;

/// Smallest display that can still show a sign, a digit and a point
pub const MIN_DISPLAY_LEN: usize = 3;

/// Default sentinel shown after a division by zero
pub const DEFAULT_ERROR_TOKEN: &str = "Error";

/// Default sentinel shown when a result cannot fit the display
pub const DEFAULT_OVERFLOW_TOKEN: &str = "Overflow";

// ============================================================================
// Configuration Errors
// ============================================================================

/// Reasons an [`EngineConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Display bound below [`MIN_DISPLAY_LEN`]
    DisplayTooNarrow(usize),
    /// Precision outside `1..=MAX_PRECISION`
    PrecisionOutOfRange(u32),
    /// Sentinel token is empty or reads as a number
    InvalidToken(String),
    /// Error and overflow tokens are the same
    IndistinctTokens,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DisplayTooNarrow(len) => write!(
                f,
                "display length {} is below the minimum of {}",
                len, MIN_DISPLAY_LEN
            ),
            ConfigError::PrecisionOutOfRange(p) => write!(
                f,
                "precision {} must be between 1 and {} significant digits",
                p, MAX_PRECISION
            ),
            ConfigError::InvalidToken(token) => {
                write!(f, "sentinel token {:?} must be non-empty and non-numeric", token)
            },
            ConfigError::IndistinctTokens => {
                write!(f, "error and overflow tokens must differ")
            },
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Construction-time configuration for a calculator engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Maximum characters in the main display, for typed entries and results
    pub max_display_len: usize,

    /// Significant digits kept by every arithmetic result
    pub precision: u32,

    /// Display text after a division by zero
    pub error_token: String,

    /// Display text after a result that cannot fit the display
    pub overflow_token: String,
}

impl EngineConfig {
    /// Create a configuration with the default tokens
    pub fn new(max_display_len: usize, precision: u32) -> Self {
        Self {
            max_display_len,
            precision,
            error_token: DEFAULT_ERROR_TOKEN.to_string(),
            overflow_token: DEFAULT_OVERFLOW_TOKEN.to_string(),
        }
    }

    /// Builder method: Set maximum display length
    pub fn with_max_display_len(mut self, len: usize) -> Self {
        self.max_display_len = len;
        self
    }

    /// Builder method: Set working precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set the division-by-zero sentinel
    pub fn with_error_token(mut self, token: impl Into<String>) -> Self {
        self.error_token = token.into();
        self
    }

    /// Builder method: Set the overflow sentinel
    pub fn with_overflow_token(mut self, token: impl Into<String>) -> Self {
        self.overflow_token = token.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_display_len < MIN_DISPLAY_LEN {
            return Err(ConfigError::DisplayTooNarrow(self.max_display_len));
        }

        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionOutOfRange(self.precision));
        }

        for token in [&self.error_token, &self.overflow_token] {
            // Anything that parses (including "" and "-") would be mistaken for an entry
            if token.trim().is_empty() || parse_entry(token).is_ok() {
                return Err(ConfigError::InvalidToken(token.clone()));
            }
        }

        if self.error_token == self.overflow_token {
            return Err(ConfigError::IndistinctTokens);
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISPLAY_LEN, DEFAULT_PRECISION)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl EngineConfig {
    /// Desktop calculator: 32-character display, 28 significant digits
    pub fn desktop() -> Self {
        Self::default()
    }

    /// Pocket calculator: 12-character display, 12 significant digits
    pub fn pocket() -> Self {
        Self::new(12, 12)
    }
}
