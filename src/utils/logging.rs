// ============================================================================
// Logging Bootstrap
// Subscriber setup for binaries and demos; the library itself only emits
// ============================================================================
//
// The crate logs through `tracing`:
// - trace: working precision chosen for each normalization
// - debug: rejected operands, currency mismatches, toolkit calls
//
// Nothing is printed unless the host installs a subscriber. Binaries that
// do not have one can call `init_tracing` once at startup.

use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_level` (e.g. `"monetary=debug"`).
///
/// # Errors
/// Fails if a global subscriber has already been set.
pub fn init_tracing(default_level: &str) -> Result<(), InitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()?;

    tracing::debug!("tracing initialized");
    Ok(())
}
