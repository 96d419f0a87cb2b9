//! Configuration file handling.
//!
//! The config lives at `$XDG_CONFIG_HOME/mouse-mover/config.toml`. Every
//! field is optional; missing fields and a missing file fall back to the
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cursor::Backend;
use crate::driver::{DriverSettings, DEFAULT_DELAY_MS, DEFAULT_INTERVAL, DEFAULT_TOTAL_CYCLES};
use crate::pattern::{Pattern, ScreenSize, DEFAULT_MARGIN};

/// Errors that can occur while loading or validating the config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub run: RunConfig,
    pub screen: ScreenConfig,
    pub cursor: CursorConfig,
}

/// `[run]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of cycles before the program exits
    pub total_cycles: u32,
    /// Time between cycles
    pub interval_ms: u64,
    /// Shortest pause between two cursor moves
    pub min_delay_ms: u64,
    /// Longest pause between two cursor moves
    pub max_delay_ms: u64,
    /// Patterns to choose from
    pub patterns: Vec<Pattern>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total_cycles: DEFAULT_TOTAL_CYCLES,
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            min_delay_ms: *DEFAULT_DELAY_MS.start(),
            max_delay_ms: *DEFAULT_DELAY_MS.end(),
            patterns: Pattern::ALL.to_vec(),
        }
    }
}

/// `[screen]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Subtracted from half the display height
    pub margin: u32,
    /// Display size used when the cursor tool cannot report one
    pub fallback_width: u32,
    pub fallback_height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            fallback_width: 1920,
            fallback_height: 1080,
        }
    }
}

/// `[cursor]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub backend: Backend,
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("mouse-mover").join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let run = &self.run;
        if run.total_cycles == 0 {
            return Err(ConfigError::Invalid(
                "run.total_cycles must be at least 1".to_string(),
            ));
        }
        if run.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "run.interval_ms must be at least 1".to_string(),
            ));
        }
        if run.min_delay_ms == 0 {
            return Err(ConfigError::Invalid(
                "run.min_delay_ms must be at least 1".to_string(),
            ));
        }
        if run.min_delay_ms > run.max_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "run.min_delay_ms ({}) is greater than run.max_delay_ms ({})",
                run.min_delay_ms, run.max_delay_ms
            )));
        }
        if run.patterns.is_empty() {
            return Err(ConfigError::Invalid(
                "run.patterns must name at least one pattern".to_string(),
            ));
        }
        if self.screen.fallback_width == 0 || self.screen.fallback_height == 0 {
            return Err(ConfigError::Invalid(
                "screen.fallback_width and screen.fallback_height must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Settings for the cycle driver.
    pub fn driver_settings(&self) -> DriverSettings {
        let mut patterns: Vec<Pattern> = Vec::with_capacity(self.run.patterns.len());
        for pattern in &self.run.patterns {
            if !patterns.contains(pattern) {
                patterns.push(*pattern);
            }
        }
        DriverSettings {
            total_cycles: self.run.total_cycles,
            interval: Duration::from_millis(self.run.interval_ms),
            min_delay_ms: self.run.min_delay_ms,
            max_delay_ms: self.run.max_delay_ms,
            patterns,
            margin: self.screen.margin,
        }
    }

    pub fn fallback_screen(&self) -> ScreenSize {
        ScreenSize::new(self.screen.fallback_width, self.screen.fallback_height)
    }
}
