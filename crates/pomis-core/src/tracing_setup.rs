//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

const LOG_ENV: &str = "POMIS_LOG";

/// Crate targets that log; each gets the fallback level.
const TARGETS: [&str; 3] = ["pomis_core", "pomis_graph", "pomis_plus"];

fn fallback_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn env_filter_or(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback_directives(level)))
}

/// Install a plain-text subscriber with file and line locations.
///
/// `POMIS_LOG` takes standard `EnvFilter` directives, e.g.
/// `POMIS_LOG=pomis_plus::enumerator=debug` to trace each branch of the
/// sequence search. Unset or unparsable, every pomis crate logs at `info`.
/// Only the first call across this and [`init_tracing_with_config`] installs.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(env_filter_or("info"))
            .init();
    });
}

/// Initialize tracing from a [`LoggingConfig`]. `POMIS_LOG` still wins when set.
pub fn init_tracing_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = env_filter_or(config.effective_level());

        if config.effective_json() {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .json()
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_covers_every_crate_target() {
        assert_eq!(
            fallback_directives("warn"),
            "pomis_core=warn,pomis_graph=warn,pomis_plus=warn"
        );
        assert!(EnvFilter::try_new(fallback_directives("debug")).is_ok());
    }

    #[test]
    fn initialization_is_idempotent() {
        init_tracing();
        init_tracing();
        init_tracing_with_config(&LoggingConfig {
            level: Some("debug".to_string()),
            json: Some(true),
        });
        tracing::info!(target: "pomis_core", "tracing initialized");
    }
}
