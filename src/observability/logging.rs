//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` overrides the default filter when set
//! - `--debug` raises the default filter so resolution steps are visible

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "connect_gateway=info,tower_http=info";
const DEBUG_FILTER: &str = "connect_gateway=debug,tower_http=debug";

/// Default filter directives for the given debug setting.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Install the global tracing subscriber.
pub fn init_logging(debug: bool) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(debug).into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        for debug in [false, true] {
            assert!(EnvFilter::try_new(default_filter(debug)).is_ok());
        }
        assert!(default_filter(true).contains("=debug"));
    }
}
