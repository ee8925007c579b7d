// ============================================================================
// Utilities Module
// Optional helpers for hosts embedding the library
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_tracing, InitError};
