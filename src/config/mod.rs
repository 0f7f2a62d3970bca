//! Configuration module for the line code visualizer
//!
//! This module handles the startup configuration:
//! - The sequence and line code shown when the window opens
//! - Window size, canvas height, stroke width and colours
//!
//! Configuration is read-only. The application never writes it back, and the
//! session state (current bits and code) is not persisted between runs.
//!
//! # Config Location
//!
//! The configuration file is looked up in the platform config directory
//! under `dev.linecode-vis`:
//! - **Linux**: `~/.config/dev.linecode-vis/config.toml`
//! - **macOS**: `~/Library/Application Support/dev.linecode-vis/config.toml`
//! - **Windows**: `%APPDATA%\dev.linecode-vis\config.toml`
//!
//! Set `LINECODE_VIS_CONFIG` to point at a different file.
//!
//! # Example
//!
//! ```toml
//! [session]
//! bits = "0110"
//! code = "differential-manchester"
//!
//! [ui]
//! view_height = 80.0
//! waveform_color = [0, 200, 255, 255]
//! ```

use crate::error::{LineCodeError, Result, ResultExt};
use crate::sequence::{BitSequence, DEFAULT_BITS};
use crate::types::LineCode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for config directories
pub const APP_ID: &str = "dev.linecode-vis";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "LINECODE_VIS_CONFIG";

/// Window title
pub const APP_TITLE: &str = "Line Code Visualizer";

// ==================== Config Location ====================

/// Get the application config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

/// Resolve the config file path, honouring [`CONFIG_ENV_VAR`]
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir().map(|p| p.join(CONFIG_FILE)),
    }
}

// ==================== App Config ====================

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Initial session contents
    #[serde(default)]
    pub session: SessionDefaults,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| LineCodeError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load a configuration file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(LineCodeError::from)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        toml::from_str(&content).map_err(|e| {
            LineCodeError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Load from the default location, returning defaults on any error.
    ///
    /// A missing file is not an error.
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

// ==================== Session Defaults ====================

/// Sequence and line code shown at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDefaults {
    /// Initial bit sequence
    #[serde(default = "default_bits")]
    pub bits: String,

    /// Initial line code
    #[serde(default)]
    pub code: LineCode,
}

fn default_bits() -> String {
    DEFAULT_BITS.to_string()
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            bits: default_bits(),
            code: LineCode::default(),
        }
    }
}

impl SessionDefaults {
    /// Validate the configured bits, falling back to the built-in sequence
    pub fn initial_bits(&self) -> BitSequence {
        BitSequence::parse(&self.bits).unwrap_or_else(|e| {
            tracing::warn!("Ignoring configured bit sequence: {}", e);
            BitSequence::default()
        })
    }
}

// ==================== UI Config ====================

/// UI configuration for the window and waveform canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window width in points
    pub window_width: f32,

    /// Initial window height in points
    pub window_height: f32,

    /// Height of the waveform canvas in points
    pub view_height: f32,

    /// Stroke width for the waveform and gridlines
    pub line_width: f32,

    /// RGBA colour of the midline and cell boundaries
    pub grid_color: [u8; 4],

    /// RGBA colour of the waveform
    pub waveform_color: [u8; 4],

    /// Enable dark mode
    pub dark_mode: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 640.0,
            window_height: 480.0,
            view_height: 50.0,
            line_width: 1.0,
            grid_color: [255, 0, 0, 255],
            waveform_color: [255, 255, 0, 255],
            dark_mode: true,
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session.bits, "01001100011");
        assert_eq!(config.session.code, LineCode::NrzL);
        assert_eq!(config.ui.window_width, 640.0);
        assert_eq!(config.ui.view_height, 50.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [session]
            code = "ami"
            "#,
        )
        .unwrap();

        assert_eq!(config.session.code, LineCode::Ami);
        assert_eq!(config.session.bits, DEFAULT_BITS);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_empty_config() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [session]
            code = "4b5b"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, LineCodeError::Config(_)));
        assert!(err.to_string().contains("4b5b"));
    }

    #[test]
    fn test_ui_overrides() {
        let config = AppConfig::from_toml_str(
            r#"
            [ui]
            view_height = 80.0
            waveform_color = [0, 200, 255, 255]
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.view_height, 80.0);
        assert_eq!(config.ui.waveform_color, [0, 200, 255, 255]);
        assert_eq!(config.ui.line_width, 1.0);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = AppConfig::default();
        config.session.code = LineCode::DifferentialManchester;

        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("differential-manchester"));
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_default_bits_fall_back() {
        let defaults = SessionDefaults {
            bits: "01x".to_string(),
            code: LineCode::NrzL,
        };
        assert_eq!(defaults.initial_bits(), BitSequence::default());

        let defaults = SessionDefaults {
            bits: "1100".to_string(),
            code: LineCode::NrzL,
        };
        assert_eq!(defaults.initial_bits().as_str(), "1100");
    }
}
