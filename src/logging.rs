//! Logging and tracing infrastructure for symaddr.
//!
//! Structured logging goes through the tracing crate. The subscriber honours
//! `RUST_LOG` and otherwise falls back to `info`, or `debug` in verbose mode.

use std::sync::Once;
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    })
}

/// Initialize the global tracing subscriber.
///
/// This should be called once at program startup.
/// Subsequent calls are ignored.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr);

        let _ = tracing_subscriber::registry()
            .with(default_filter(verbose))
            .with(fmt_layer)
            .try_init();

        debug!("symaddr tracing initialized");
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json(verbose: bool) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr);

        let _ = tracing_subscriber::registry()
            .with(default_filter(verbose))
            .with(fmt_layer)
            .try_init();

        debug!("symaddr tracing initialized (JSON mode)");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_once() {
        // Should be callable multiple times without panic
        init_tracing(false);
        init_tracing(true);
        init_tracing_json(false);
    }

    #[test]
    fn test_structured_logging() {
        init_tracing(false);
        let label = ".LBB3_0";
        info!(label = %label, address = 0x1040u64, "Adding address for label");
    }
}
