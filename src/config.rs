//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use crate::llm::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `model.base_url`.
pub const API_URL_ENV: &str = "RESUME_ANALYZER_API_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub retry: RetryConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Fallback key when the environment variable is unset.
    pub api_key: Option<String>,
    pub temperature: f32,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            temperature: 0.7,
            request_timeout_secs: None,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 700,
            chunk_overlap: 200,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: false,
        }
    }
}

impl Config {
    /// Load from the given path, or the default location when `None`.
    /// A missing file yields the defaults; nothing is written to disk.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ResumeAnalyzerError::Configuration(format!(
                        "Config file does not exist: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => Self::config_path(),
        };

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.model.base_url = url;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
        })
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.name.trim().is_empty() {
            return Err(ResumeAnalyzerError::Configuration(
                "model.name must not be empty".to_string(),
            ));
        }
        if self.model.base_url.trim().is_empty() {
            return Err(ResumeAnalyzerError::Configuration(
                "model.base_url must not be empty".to_string(),
            ));
        }
        if self.retry.max_attempts == 0 {
            return Err(ResumeAnalyzerError::Configuration(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.processing.chunk_size <= self.processing.chunk_overlap {
            return Err(ResumeAnalyzerError::Configuration(format!(
                "processing.chunk_size ({}) must be greater than processing.chunk_overlap ({})",
                self.processing.chunk_size, self.processing.chunk_overlap
            )));
        }
        Ok(())
    }

    /// Resolve the API key from the process environment, falling back to the config file.
    pub fn api_key(&self) -> Result<String> {
        self.resolve_api_key(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.model.api_key_env)
            .or_else(|| self.model.api_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ResumeAnalyzerError::MissingApiKey(self.model.api_key_env.clone()))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry.max_attempts,
            unit: Duration::from_millis(self.retry.base_delay_ms),
        }
    }
}
