//! Configuration loading, validation, and management for Sitewright.
//!
//! Loads configuration from `~/.sitewright/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.sitewright/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pipeline (classification → plan) settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Simulated inference settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Model persistence settings
    #[serde(default)]
    pub models: ModelsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Characters of the request text included in log entries
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Simulated compute latency per run
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    #[serde(default = "default_compute_unit")]
    pub compute_unit: String,

    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            compute_unit: default_compute_unit(),
            preview_chars: default_preview_chars(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default = "default_models_dir")]
    pub directory: PathBuf,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            directory: default_models_dir(),
        }
    }
}

fn default_preview_chars() -> usize {
    50
}
fn default_latency_ms() -> u64 {
    800
}
fn default_compute_unit() -> String {
    "local-cpu".into()
}
fn default_models_dir() -> PathBuf {
    AppConfig::config_dir().join("models")
}

impl AppConfig {
    /// Load configuration from the default location.
    ///
    /// Reads `~/.sitewright/config.toml`, then applies env var overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `SITEWRIGHT_*` overrides using the given variable lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("SITEWRIGHT_MODEL_DIR") {
            self.models.directory = PathBuf::from(dir);
        }

        if let Some(latency) = lookup("SITEWRIGHT_INFERENCE_LATENCY_MS") {
            self.inference.latency_ms = latency.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "SITEWRIGHT_INFERENCE_LATENCY_MS must be an integer, got {latency:?}"
                ))
            })?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".sitewright")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.preview_chars == 0 || self.inference.preview_chars == 0 {
            return Err(ConfigError::ValidationError(
                "preview_chars must be greater than 0".into(),
            ));
        }

        if self.inference.compute_unit.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "inference.compute_unit must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for the `config` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
