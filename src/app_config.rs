use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API key for the translation endpoint (required)
    #[serde(default = "String::new")]
    pub api_key: String,

    /// API host, e.g. "https://api.openai.com" or a self-hosted server
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// Number of dialogue entries submitted per remote call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Whether the inter-batch pacing delay is applied
    #[serde(default = "default_true")]
    pub rate_limit_enabled: bool,

    /// Pacing delay in milliseconds between successful batches
    #[serde(default = "default_rate_limit_delay_ms")]
    pub rate_limit_delay_ms: u64,

    /// Attempts per batch before the pipeline fails
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Instruction prepended to every translation prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Temperature parameter for text generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_batch_size() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_rate_limit_delay_ms() -> u64 {
    5000
}

fn default_retry_count() -> u32 {
    5
}

fn default_temperature() -> f32 {
    0.3
}

fn default_prompt() -> String {
    // Translate into Simplified Chinese, keep the brace-delimited effect tags
    // in place, answer with the translations only.
    "把以下字幕翻译成简体中文，在结果的相应位置保留原字幕的特效标签，只把内容翻译成简体中文。特效标签的特征是用一对大括号{}包裹。你的结果只包含翻译后的结果。以下是原始字幕：".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values.
    /// Runs before any network activity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }

        if !self.endpoint.is_empty() && Url::parse(&self.endpoint).is_err() {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            endpoint: default_endpoint(),
            model: default_model(),
            batch_size: default_batch_size(),
            rate_limit_enabled: true,
            rate_limit_delay_ms: default_rate_limit_delay_ms(),
            retry_count: default_retry_count(),
            prompt: default_prompt(),
            temperature: default_temperature(),
            log_level: LogLevel::default(),
        }
    }
}
