//! Tracing initialisation for processes embedding the framework.
//!
//! Call [`init_tracing`] once at program start. Later calls are ignored
//! because the global subscriber can only be set once per process.

use crate::config::{ConfigError, LoggingConfig};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; `level` applies when it is unset. With
/// `json` set, events are written as newline-delimited JSON.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    if installed.is_err() {
        tracing::debug!(event = "telemetry.already_initialised");
    }
}

/// Installs the global tracing subscriber from logging configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLogLevel`] when the configured level is
/// not recognised.
pub fn init_from_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    init_tracing(config.json, config.level()?);
    Ok(())
}
