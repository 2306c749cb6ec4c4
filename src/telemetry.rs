//! Diagnostic logging to stderr. Console messages for the user go through
//! `ui::messages` instead.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured `log_level`.
pub fn init(config: &Config) -> AppResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            AppError::Telemetry(format!("invalid log level '{}': {e}", config.log_level))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| AppError::Telemetry(e.to_string()))
}
