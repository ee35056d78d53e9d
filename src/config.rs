use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub pipeline: PipelineConfig,
}

/// Model service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// AWS region for the Bedrock runtime endpoint.
    pub region: String,
    /// Model ID used for name generation and safety classification.
    pub completion_model: String,
    /// Model ID used for embedding retrieval.
    pub embedding_model: String,
    /// Sampling temperature for completions.
    pub temperature: f32,
    /// Token cap for completions; elf names are tiny.
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Attempts per model call when the service is rate limiting.
    pub max_request_retries: u32,
}

/// Pipeline retry and style-hint tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Bound on generation attempts, covering both malformed-output retries
    /// and unsafe-name regeneration cycles.
    pub max_attempts: u32,
    /// Half-width of the "near zero" band when deriving style hints.
    pub near_zero_band: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            completion_model: "us.amazon.nova-lite-v1:0".to_string(),
            embedding_model: "amazon.titan-embed-text-v1".to_string(),
            temperature: 0.7,
            max_tokens: 100,
            request_timeout_secs: 30,
            max_request_retries: 3,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            near_zero_band: crate::core::style::DEFAULT_NEAR_ZERO_BAND,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/elfgen/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("elfgen").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
