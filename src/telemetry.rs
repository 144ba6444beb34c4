//! # Telemetry
//!
//! Installs the global `tracing` subscriber.
//!
//! `RUST_LOG` wins over the configured level when set.

use crate::config::{ConfigError, LogFormat, LoggingConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the event filter from `RUST_LOG`, falling back to the configured level.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if the configured level is not a valid
/// filter directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConfigError::invalid(format!("logging.level {:?}: {e}", config.level)))
}

/// Installs a global subscriber writing in the configured format.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if the level is malformed or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let registry = tracing_subscriber::registry().with(build_filter(config)?);
    let installed = match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
    };
    installed.map_err(|e| ConfigError::invalid(format!("tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_directive_lists() {
        let config = LoggingConfig {
            level: "warn,quote_configurator=debug".to_owned(),
            ..LoggingConfig::default()
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn rejects_malformed_level() {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "quote_configurator=loud".to_owned(),
            ..LoggingConfig::default()
        };
        assert!(matches!(build_filter(&config), Err(ConfigError::Invalid(_))));
    }
}
