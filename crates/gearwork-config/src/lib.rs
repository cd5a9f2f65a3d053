//! Configuration for the gearwork clock.
//!
//! Settings live in `config.toml` under the platform config directory.
//! Every field is optional in the file; missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use gearwork_core::{ColorTheme, SpeedPreset, TimeFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

const CONFIG_FILE: &str = "config.toml";

/// Bounds for the frame interval.
pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 1000;
const DEFAULT_TICK_RATE_MS: u64 = 33;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// User-facing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 12-hour or 24-hour readout.
    pub time_format: TimeFormat,
    /// Accent color.
    pub color_theme: ColorTheme,
    /// Initial simulation speed.
    pub speed: SpeedPreset,
    /// Start with the dial see-through so the gears show.
    pub skeleton: bool,
    /// Show the transmission panel next to the dial.
    pub show_mechanism: bool,
    /// Fixed start time in seconds; the local wall clock when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_seconds: Option<f64>,
    /// Frame interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::default(),
            color_theme: ColorTheme::default(),
            speed: SpeedPreset::default(),
            skeleton: false,
            show_mechanism: true,
            start_seconds: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn path() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "gearwork")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(Self::path()?)
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(Self::path()?)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Reject values the app cannot use.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(start) = self.start_seconds
            && !start.is_finite()
        {
            return Err(ConfigError::InvalidValue(format!(
                "start_seconds must be finite, got {start}"
            )));
        }
        Ok(())
    }

    /// Frame interval, clamped to a usable range.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.clamp(MIN_TICK_RATE_MS, MAX_TICK_RATE_MS))
    }
}
