//! Tracing setup for the command-line host.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to whoever embeds it.

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber filtered by `RUST_LOG`, defaulting to
/// `default_level` when the variable is unset or invalid.
///
/// Returns `false` if a global subscriber was already installed.
#[must_use]
pub fn init_tracing(default_level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
