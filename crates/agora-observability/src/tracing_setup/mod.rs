//! Tracing setup: env-filtered subscriber, plain or JSON lines.

pub mod spans;

use std::sync::Once;

use agora_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "AGORA_LOG";

/// Initialize the subscriber from config.
///
/// `AGORA_LOG` takes precedence over `config.log_level`, e.g.
/// `AGORA_LOG=agora_engine=debug,agora_privacy=trace`.
///
/// Idempotent. If the host process already installed a global subscriber,
/// that one is kept.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
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
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
