//! Configuration for vectorkit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Drawing defaults (colors for fresh shapes, hit tolerance)
//! - History limits
//! - Export layout (file name, canvas size, background grid)
//! - Import fallbacks (colors used when a document omits them)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsResult};

/// Drawing defaults applied to freshly created shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Explicit fill applied by the "reset fill" action
    pub default_fill: String,
    /// Stroke color for new shapes
    pub default_stroke: String,
    /// Alpha of the rgba() fill derived from the stroke for fresh shapes
    pub fresh_fill_alpha: f64,
    /// Pointer slop when hit-testing shapes and path points
    pub hit_tolerance: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            default_fill: "#ffffff".to_string(),
            default_stroke: "#000000".to_string(),
            fresh_fill_alpha: 0.3,
            hit_tolerance: 6.0,
        }
    }
}

/// Undo/redo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undo snapshots (0 = unbounded)
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

/// Export layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Suggested file name for the exported document
    pub file_name: String,
    /// Canvas width used when no view frame is set
    pub canvas_width: f64,
    /// Canvas height used when no view frame is set
    pub canvas_height: f64,
    /// Draw the background grid
    pub grid_enabled: bool,
    /// Grid cell size in user units
    pub grid_spacing: f64,
    /// Grid line color
    pub grid_color: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: "drawing.svg".to_string(),
            canvas_width: 800.0,
            canvas_height: 600.0,
            grid_enabled: true,
            grid_spacing: 20.0,
            grid_color: "#e0e0e0".to_string(),
        }
    }
}

/// Import fallback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Fill for elements without a fill attribute
    pub fallback_fill: String,
    /// Stroke for elements without a stroke attribute
    pub fallback_stroke: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            fallback_fill: "transparent".to_string(),
            fallback_stroke: "black".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub drawing: DrawingSettings,
    pub history: HistorySettings,
    pub export: ExportSettings,
    pub import: ImportSettings,
}

/// Returns true for `#rrggbb` strings.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/vectorkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("vectorkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(
                    ConfigError::UnsupportedFormat(other.unwrap_or_default().to_string()).into(),
                )
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config, falling back to defaults when the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(
                    ConfigError::UnsupportedFormat(other.unwrap_or_default().to_string()).into(),
                )
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("drawing.default_fill", &self.drawing.default_fill),
            ("drawing.default_stroke", &self.drawing.default_stroke),
            ("export.grid_color", &self.export.grid_color),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::InvalidColor {
                    key: key.to_string(),
                    value: value.clone(),
                });
            }
        }

        if !(0.0..=1.0).contains(&self.drawing.fresh_fill_alpha) {
            return Err(out_of_range(
                "drawing.fresh_fill_alpha",
                self.drawing.fresh_fill_alpha,
            ));
        }

        if !self.drawing.hit_tolerance.is_finite() || self.drawing.hit_tolerance < 0.0 {
            return Err(out_of_range("drawing.hit_tolerance", self.drawing.hit_tolerance));
        }

        if !is_positive(self.export.canvas_width) {
            return Err(out_of_range("export.canvas_width", self.export.canvas_width));
        }

        if !is_positive(self.export.canvas_height) {
            return Err(out_of_range("export.canvas_height", self.export.canvas_height));
        }

        if !is_positive(self.export.grid_spacing) {
            return Err(out_of_range("export.grid_spacing", self.export.grid_spacing));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
