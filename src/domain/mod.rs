// ============================================================================
// Domain Models Module
// Configuration, key identifiers and the engine state record
// ============================================================================

pub mod config;
pub mod key;
pub mod state;

pub use config::{
    ConfigError, EngineConfig, DEFAULT_ERROR_TOKEN, DEFAULT_MAX_DISPLAY_LEN,
    DEFAULT_OVERFLOW_TOKEN, DEFAULT_PRECISION,
};
pub use key::{Key, UnknownKey};
pub use state::{EngineSnapshot, EngineState, ErrorKind};
