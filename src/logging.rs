//! Logging setup using tracing
//!
//! The library itself only emits `tracing` events: `debug` for operations
//! that change a repository or load settings, `trace` for lookups. Binaries
//! and tests that want to see them call [`init`].

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// # Example RUST_LOG values
/// - `RUST_LOG=gitveneer=debug` - repository mutations and settings loads
/// - `RUST_LOG=gitveneer=trace` - every lookup as well
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
}

/// Initialize logging for tests (no-op if already initialized)
///
/// Every call after the first fails to install a second global subscriber;
/// that error is ignored.
pub fn init_test() {
    let _ = init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_test_is_idempotent() {
        init_test();
        init_test();
    }

    #[test]
    fn events_after_init() {
        init_test();
        tracing::debug!(path = "/tmp/repo", "opened repository");
        tracing::trace!(oid = "abc1", "lookup commit");
    }
}
