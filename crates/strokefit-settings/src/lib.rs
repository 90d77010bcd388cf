//! StrokeFit Settings Crate
//!
//! Handles configuration files for the curve pipeline and logging.

pub mod config;
pub mod error;

pub use config::{Config, LoggingSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
