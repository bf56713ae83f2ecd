//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\record-sleeve\config.toml
//! - macOS: ~/Library/Application Support/record-sleeve/config.toml
//! - Linux: ~/.config/record-sleeve/config.toml
//!
//! Every key is optional; missing keys take their defaults. The config is
//! loaded once at startup and passed down by reference, never mutated
//! afterwards.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::enrichment::RetryPolicy;
use crate::error::{Error, Result};
use crate::render::OutputFormat;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MusicBrainz web service settings
    pub musicbrainz: MusicBrainzConfig,

    /// Backoff settings for release lookups
    pub retry: RetryConfig,

    /// Batch run behavior
    pub batch: BatchConfig,

    /// Rendered document settings
    pub output: OutputConfig,
}

/// MusicBrainz web service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicBrainzConfig {
    /// Root of the WS/2 API
    pub base_url: String,

    /// Application name sent in the User-Agent
    pub app_name: String,

    /// Application version sent in the User-Agent
    pub app_version: String,

    /// Contact (URL or e-mail) sent in the User-Agent
    pub contact: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: "https://musicbrainz.org/ws/2".to_string(),
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contact: "anonymous".to_string(),
            timeout_secs: 30,
        }
    }
}

impl MusicBrainzConfig {
    /// Validated per-request timeout
    pub fn timeout(&self) -> Result<Duration> {
        if self.timeout_secs == 0 {
            return Err(Error::config("musicbrainz.timeout_secs must be at least 1"));
        }
        Ok(Duration::from_secs(self.timeout_secs))
    }
}

/// Backoff settings for release lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Delay after the first failed attempt
    pub initial_interval_ms: u64,

    /// Growth factor between delays
    pub multiplier: f64,

    /// Cap on a single delay
    pub max_interval_ms: u64,

    /// Total time budget per lookup; 0 = retry forever
    pub max_elapsed_secs: u64,

    /// Optional cap on attempts per lookup
    pub max_attempts: Option<u32>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: 500,
            multiplier: 1.5,
            max_interval_ms: 60_000,
            max_elapsed_secs: 15 * 60,
            max_attempts: None,
        }
    }
}

impl RetryConfig {
    /// Validate and convert into the policy used by the enricher
    pub fn to_policy(&self) -> Result<RetryPolicy> {
        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            return Err(Error::config(format!(
                "retry.multiplier must be a number >= 1.0, got {}",
                self.multiplier
            )));
        }
        if self.initial_interval_ms == 0 {
            return Err(Error::config("retry.initial_interval_ms must be positive"));
        }
        if self.max_interval_ms < self.initial_interval_ms {
            return Err(Error::config(
                "retry.max_interval_ms must not be smaller than retry.initial_interval_ms",
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(Error::config("retry.max_attempts must be at least 1"));
        }

        Ok(RetryPolicy {
            initial_interval: Duration::from_millis(self.initial_interval_ms),
            multiplier: self.multiplier,
            max_interval: Duration::from_millis(self.max_interval_ms),
            max_elapsed: (self.max_elapsed_secs > 0)
                .then(|| Duration::from_secs(self.max_elapsed_secs)),
            max_attempts: self.max_attempts,
        })
    }
}

/// Batch run behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Keep going when a lookup fails, emitting the record unenriched
    pub keep_going: bool,

    /// Show the per-row progress line on stderr
    pub progress: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            keep_going: false,
            progress: true,
        }
    }
}

/// Rendered document settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Document format
    pub format: OutputFormat,

    /// Heading of the Markdown document
    pub heading: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Markdown,
            heading: "Record Collection".to_string(),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("record-sleeve"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Parse a config from TOML text
pub fn parse(contents: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration.
///
/// With an explicit `path`, the file must exist and parse. Without one,
/// the default location is tried and any problem falls back to defaults
/// with a logged warning.
pub fn load(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = parse(&contents).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("Loaded config from {:?}", path);
        return Ok(config);
    }

    Ok(load_default())
}

fn load_default() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to `path`
///
/// Creates the parent directory if it doesn't exist.
pub fn save(config: &Config, path: &Path) -> std::result::Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration file write errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
