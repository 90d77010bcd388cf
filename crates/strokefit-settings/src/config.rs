//! Configuration file handling.
//!
//! A [`Config`] bundles the curve pipeline parameters with logging
//! preferences. Files are read and written as JSON or TOML depending on
//! the extension; any section or field left out of a file takes its
//! default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strokefit_core::CurveParameters;

use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "strokefit";
const CONFIG_FILE: &str = "config.toml";

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingSettings {
    /// Parse `level` into a tracing level.
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        self.level
            .trim()
            .parse::<tracing::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Curve pipeline parameters
    pub curve: CurveParameters,
    /// Logging preferences
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config_dir>/strokefit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("could not determine config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load `path` if given, otherwise the default location if it exists,
    /// otherwise the built-in defaults.
    ///
    /// An explicitly named file must exist; a missing default file is not
    /// an error.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::warn!(error = %e, "Using built-in config defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.curve.validate()?;
        self.logging.tracing_level()?;
        Ok(())
    }
}
