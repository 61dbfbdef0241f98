//! Calendar core configuration.
//!
//! # Responsibility
//! - Load layout caps and logging settings from JSON.
//! - Validate values before they reach layout or logging bootstrap.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - Caps are at least 1.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::layout::linear::{LinearLayoutEngine, DEFAULT_MAX_EVENTS_PER_DAY};
use crate::layout::month_grid::DEFAULT_GRID_MAX_EVENTS_PER_DAY;
use crate::logging::{default_log_level, normalize_level, LoggingConfig};

/// Environment variable the CLI reads a config path from.
pub const CONFIG_PATH_ENV: &str = "LINECAL_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    InvalidValue { field: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::InvalidValue { field, message } => {
                write!(f, "invalid config value for `{field}`: {message}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Visible events per day in the linear year view.
    pub linear_max_events_per_day: usize,
    /// Visible events per day in the month grid view.
    pub month_grid_max_events_per_day: usize,
    /// `trace|debug|info|warn|error`; build-mode default when absent.
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files; logging stays off when absent.
    pub log_dir: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            linear_max_events_per_day: DEFAULT_MAX_EVENTS_PER_DAY,
            month_grid_max_events_per_day: DEFAULT_GRID_MAX_EVENTS_PER_DAY,
            log_level: None,
            log_dir: None,
        }
    }
}

impl CalendarConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.linear_max_events_per_day == 0 {
            return Err(ConfigError::InvalidValue {
                field: "linear_max_events_per_day",
                message: "must be at least 1".to_string(),
            });
        }
        if self.month_grid_max_events_per_day == 0 {
            return Err(ConfigError::InvalidValue {
                field: "month_grid_max_events_per_day",
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(level) = &self.log_level {
            normalize_level(level).map_err(|err| ConfigError::InvalidValue {
                field: "log_level",
                message: err.to_string(),
            })?;
        }
        if let Some(dir) = &self.log_dir {
            if !Path::new(dir.trim()).is_absolute() {
                return Err(ConfigError::InvalidValue {
                    field: "log_dir",
                    message: format!("must be an absolute path, got `{dir}`"),
                });
            }
        }
        Ok(())
    }

    pub fn linear_engine(&self) -> LinearLayoutEngine {
        LinearLayoutEngine::new(self.linear_max_events_per_day)
    }

    /// Logging settings, or `None` when no log directory is configured.
    pub fn logging(&self) -> Option<LoggingConfig> {
        let dir = self.log_dir.as_ref()?;
        Some(LoggingConfig {
            level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: dir.clone(),
        })
    }
}
