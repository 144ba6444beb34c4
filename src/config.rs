//! # Configuration
//!
//! Layered settings for the configurator:
//!
//! 1. Built-in defaults (in-memory storage, `info` pretty logs)
//! 2. An optional `configurator.toml` (or `.json`, `.yaml`) file
//! 3. Environment variables prefixed with `CONFIGURATOR__`, nested with
//!    double underscores (`CONFIGURATOR__STORAGE__BACKEND=file`)
//!
//! [`AppConfig::load`] reads a `.env` file first, if present.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::config::{AppConfig, StorageBackend};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.storage.backend, StorageBackend::Memory);
//! assert_eq!(config.logging.level, "info");
//! ```

use crate::infrastructure::persistence::{
    InMemoryKeyValueStore, JsonFileStore, KeyValueStore, PersistenceResult,
};
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "CONFIGURATOR";

/// Base name of the optional configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "configurator";

/// Default directory of the file backend.
pub const DEFAULT_STORAGE_DIRECTORY: &str = ".configurator";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is not acceptable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Which persistence backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map; state ends with the process.
    #[default]
    Memory,
    /// One JSON file per key.
    File,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => Err(ConfigError::invalid(format!("unknown storage backend {other:?}"))),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend kind.
    pub backend: StorageBackend,
    /// Root directory of the file backend.
    pub directory: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            directory: PathBuf::from(DEFAULT_STORAGE_DIRECTORY),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Persistence settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads `.env`, then `configurator.*` from the working directory and
    /// the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!(error = %e, "ignoring unreadable .env file");
        }
        Self::load_from(Some(Path::new(DEFAULT_CONFIG_FILE)))
    }

    /// Loads defaults, the optional file at `path` and the environment.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value is invalid.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layered(path, None)
    }

    /// Layers defaults, the optional file and environment variables. `env`
    /// replaces the process environment when given.
    fn load_layered(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("storage.backend", defaults.storage.backend.to_string())?
            .set_default(
                "storage.directory",
                defaults.storage.directory.display().to_string(),
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", "pretty")?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(env),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            backend = %config.storage.backend,
            directory = %config.storage.directory.display(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the file backend has no directory
    /// or the log level is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::File
            && self.storage.directory.as_os_str().is_empty()
        {
            return Err(ConfigError::invalid(
                "storage.directory is required for the file backend",
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid("logging.level must not be empty"));
        }
        Ok(())
    }

    /// Builds the configured persistence backend.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the file backend's directory cannot be
    /// created.
    pub fn build_store(&self) -> PersistenceResult<Arc<dyn KeyValueStore>> {
        match self.storage.backend {
            StorageBackend::Memory => Ok(Arc::new(InMemoryKeyValueStore::new())),
            StorageBackend::File => Ok(Arc::new(JsonFileStore::open(&self.storage.directory)?)),
        }
    }
}
