// ============================================================================
// Utilities Module
// Presentation-side helpers that never feed back into engine state
// ============================================================================

mod compact;

pub use compact::{compact_display, COMPACT_SIGNIFICANT_DIGITS};
