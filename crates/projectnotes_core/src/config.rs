//! Host-facing core configuration.
//!
//! # Responsibility
//! - Collect the few knobs the core reads at startup (log level, log dir).
//! - Load them from `PROJECTNOTES_*` environment variables.
//!
//! # Invariants
//! - `log_level` is always one of `trace|debug|info|warn|error` after load.
//! - `log_dir`, when set, is absolute.

use crate::logging::{default_log_level, init_logging, normalize_level, normalize_log_dir};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "PROJECTNOTES_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const ENV_LOG_DIR: &str = "PROJECTNOTES_LOG_DIR";

/// Startup configuration for the core.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Configuration load errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

impl CoreConfig {
    /// Loads configuration from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// Unset or blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level = normalize_level(&raw)
                .map_err(|message| ConfigError::InvalidValue {
                    key: ENV_LOG_LEVEL,
                    message,
                })?
                .to_string();
        }

        if let Some(raw) = non_blank(lookup(ENV_LOG_DIR)) {
            let dir = normalize_log_dir(&raw).map_err(|message| ConfigError::InvalidValue {
                key: ENV_LOG_DIR,
                message,
            })?;
            config.log_dir = Some(dir);
        }

        Ok(config)
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging is disabled by configuration.
    pub fn apply_logging(&self) -> Result<bool, String> {
        let Some(dir) = self.log_dir.as_ref() else {
            return Ok(false);
        };
        let dir = dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: `{}`", dir.display()))?;
        init_logging(&self.log_level, dir)?;
        Ok(true)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}
