//! Top-level configuration and loading

use crate::components::{LoggingConfig, SearchConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding [`SearchConfig::endpoint`]
pub const ENV_ENDPOINT: &str = "WEBSEARCH_ENDPOINT";
/// Environment variable overriding [`SearchConfig::timeout_secs`] (`0` disables the timeout)
pub const ENV_TIMEOUT_SECS: &str = "WEBSEARCH_TIMEOUT_SECS";
/// Environment variable overriding [`SearchConfig::user_agent`]
pub const ENV_USER_AGENT: &str = "WEBSEARCH_USER_AGENT";
/// When set, the user config file is never read
pub const ENV_TEST_MODE: &str = "WEBSEARCH_TEST_MODE";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// An environment override holds an unusable value
    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WebSearchConfig {
    /// Outbound search settings
    pub search: SearchConfig,

    /// Log output settings
    pub logging: LoggingConfig,
}

impl WebSearchConfig {
    /// Load configuration from `config_file`, or the default location if it
    /// exists, then apply environment overrides.
    ///
    /// An explicitly named file must exist; a missing default file just
    /// means built-in defaults.
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::from_default_location()?,
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// `<config_dir>/websearch-mcp/config.toml`, if a config dir exists on this platform
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("websearch-mcp").join("config.toml"))
    }

    fn from_default_location() -> ConfigResult<Self> {
        if std::env::var_os(ENV_TEST_MODE).is_some() {
            return Ok(Self::default());
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply `WEBSEARCH_*` environment variables on top of the current values
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            self.search.endpoint = endpoint;
        }
        if let Ok(timeout) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = timeout.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_TIMEOUT_SECS,
                value: timeout.clone(),
            })?;
            self.search.timeout_secs = (secs > 0).then_some(secs);
        }
        if let Ok(user_agent) = std::env::var(ENV_USER_AGENT) {
            self.search.user_agent = user_agent;
        }
        Ok(())
    }

    /// Render as pretty TOML (used by `websearch-mcp config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
