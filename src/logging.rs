//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so the report on stdout stays clean.
//! `RUST_LOG` takes precedence over the `--verbose` default.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "tfridge=debug"
    } else {
        "tfridge=warn"
    }
}

/// Install the global tracing subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "tfridge=warn");
        assert_eq!(default_directive(true), "tfridge=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
