//! Subscriber setup for applications.
//!
//! The library crates only emit `tracing` events. Call [`init`] once at
//! startup to see them.

use std::str::FromStr;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the filter directive, e.g. `cosm_query=debug`.
pub const LOG_ENV: &str = "COSM_LOG";
/// Environment variable selecting `text` or `json` output.
pub const LOG_FORMAT_ENV: &str = "COSM_LOG_FORMAT";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::InvalidFormat(other.to_string())),
        }
    }
}

/// Errors from subscriber setup.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive did not parse.
    #[error("invalid log filter '{0}'")]
    InvalidFilter(String),
    /// The format name is neither `text` nor `json`.
    #[error("invalid log format '{0}'")]
    InvalidFormat(String),
    /// A global subscriber is already installed.
    #[error("logging already initialised: {0}")]
    AlreadyInitialized(String),
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Read `COSM_LOG` and `COSM_LOG_FORMAT`, falling back to the defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoggingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            config.level = level;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV).filter(|v| !v.trim().is_empty()) {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    fn filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.level).map_err(|_| LoggingError::InvalidFilter(self.level.clone()))
    }
}

/// Install a global subscriber per `config`.
///
/// # Returns
/// `AlreadyInitialized` if some subscriber is already installed; the
/// existing one stays in place.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = config.filter()?;
    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
    };
    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
