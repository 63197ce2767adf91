//! Tracing initialization and configuration.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verity_core::config::ObservabilityConfig;
use verity_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Verity tracing/logging system with default settings.
///
/// Reads `VERITY_LOG` for per-crate log levels.
/// Format: `VERITY_LOG=verity_estimator=debug,verity_classifier=info`
///
/// Falls back to `info` if `VERITY_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing using the observability section of the config.
///
/// `VERITY_LOG` still takes priority over `config.log_level`.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("a global tracing subscriber was already installed");
        }
    });
}
