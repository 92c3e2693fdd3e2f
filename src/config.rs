use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{COLS, ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Intrinsic canvas size and disc geometry, in canvas units.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub disc_radius: f64,
    pub cell_spacing: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: 1000.0,
            height: 800.0,
            disc_radius: 50.0,
            cell_spacing: 15.0,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Upper bound on the time between two frames.
    pub frame_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            frame_interval_ms: 16,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log destination. Logging is off when unset, the terminal belongs to the game.
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: None,
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = &self.canvas;
        if canvas.disc_radius <= 0.0 {
            return Err(ConfigError::Validation(
                "canvas.disc_radius must be > 0".into(),
            ));
        }
        if canvas.cell_spacing < 0.0 {
            return Err(ConfigError::Validation(
                "canvas.cell_spacing must be >= 0".into(),
            ));
        }

        let pitch = canvas.disc_radius * 2.0 + canvas.cell_spacing;
        if canvas.width < COLS as f64 * pitch {
            return Err(ConfigError::Validation(format!(
                "canvas.width must be >= {} to fit {} columns",
                COLS as f64 * pitch,
                COLS
            )));
        }
        if canvas.height < ROWS as f64 * pitch {
            return Err(ConfigError::Validation(format!(
                "canvas.height must be >= {} to fit {} rows",
                ROWS as f64 * pitch,
                ROWS
            )));
        }

        if self.ui.frame_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.frame_interval_ms must be > 0".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
