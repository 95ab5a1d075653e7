//! Settings for vectorkit
//!
//! Loads, validates and persists the editor configuration.

pub mod config;
pub mod error;

pub use config::{
    is_hex_color, Config, DrawingSettings, ExportSettings, HistorySettings, ImportSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
