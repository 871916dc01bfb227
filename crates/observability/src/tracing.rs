//! Tracing/logging initialization.
//!
//! Logs go to stderr as JSON lines so stdout stays reserved for the
//! interactive prompts. Verbosity comes from `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`], with a caller-chosen fallback filter.
pub fn init_with_default(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn first_init_installs_global_subscriber_and_later_calls_are_no_ops() {
        super::init();
        assert!(::tracing::dispatcher::has_been_set());

        // A second install would panic inside `init()` if it weren't ignored.
        super::init_with_default("debug");
        assert!(::tracing::dispatcher::has_been_set());
    }
}
