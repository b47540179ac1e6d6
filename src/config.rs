//! Configuration file parser for ~/.config/eduscroll/config.toml.
//!
//! The file is optional; without one every field keeps its default. Unknown
//! keys are ignored by serde, though a warning is logged when the file
//! contains potential typos. The `EDUSCROLL_API_URL` environment variable
//! overrides the file's `api_base_url` (see [`Config::with_env_overrides`]).

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified; missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the EDUScroll API server.
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum response body size in bytes.
    pub max_response_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 30,
            max_response_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Environment variable that overrides `api_base_url`.
    pub const ENV_BASE_URL: &'static str = "EDUSCROLL_API_URL";

    /// Load configuration from a TOML file.
    ///
    /// Missing or empty files yield `Config::default()`; invalid TOML is a
    /// [`ConfigError::Parse`] carrying line information; unknown keys are
    /// accepted and logged.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse as a raw table first to warn about probable typos
        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = ["api_base_url", "request_timeout_secs", "max_response_bytes"];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), api_base_url = %config.api_base_url, "Loaded configuration");
        Ok(config)
    }

    /// Apply environment overrides on top of the loaded file.
    ///
    /// `EDUSCROLL_API_URL` takes precedence over `api_base_url` from the
    /// file; blank values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(Self::ENV_BASE_URL) {
            if url.trim().is_empty() {
                tracing::warn!(var = Self::ENV_BASE_URL, "Ignoring blank environment override");
            } else {
                tracing::info!(api_base_url = %url, "Overriding api_base_url from environment");
                self.api_base_url = url;
            }
        }
        self
    }
}
