//! Application configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[serde(default)]` fills missing fields from `Default::default()`, so a
//! config file only needs the keys it wants to change:
//!
//! ```toml
//! [service]
//! endpoint = "http://localhost:5000/explain"
//!
//! [background]
//! refresh_secs = 0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::background::DEFAULT_REPEAT;
use crate::language::Language;

/// Where the explanation service lives by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/explain";

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explanation service settings
    pub service: ServiceConfig,

    /// Window and editor appearance
    pub ui: UiConfig,

    /// Decorative background settings
    pub background: BackgroundConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("code-explainer").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::default_path()?)
    }

    /// Saves the config to a file, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.service.endpoint)
            .map_err(|e| ConfigError::Invalid(format!("service.endpoint: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "service.endpoint: unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if !self.ui.font_size.is_finite() || self.ui.font_size <= 0.0 {
            return Err(ConfigError::Invalid("ui.font_size must be positive".into()));
        }
        Ok(())
    }
}

/// Explanation service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// URL that receives the POST
    pub endpoint: String,

    /// Request timeout in seconds (0 to disable)
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 0,
        }
    }
}

/// UI appearance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Start in dark mode
    pub dark_mode: bool,

    /// Editor font size in points
    pub font_size: f32,

    /// Language selected at startup
    pub default_language: Language,

    /// Optional JSON palette overriding the built-in theme
    pub theme_file: Option<PathBuf>,

    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: 14.0,
            default_language: Language::Auto,
            theme_file: None,
            window_width: 1100.0,
            window_height: 800.0,
        }
    }
}

/// Decorative background configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Draw the background at all
    pub enabled: bool,

    /// Regeneration interval in seconds (0 to disable)
    pub refresh_secs: u64,

    /// Template repetitions
    pub repeat: usize,

    /// Scroll animation step in milliseconds
    pub scroll_interval_ms: u64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_secs: 25,
            repeat: DEFAULT_REPEAT,
            scroll_interval_ms: 80,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value: {0}")]
    Invalid(String),
}
