//! Configuration file handling for saving and loading app settings.
//!
//! The config is a small JSON document. Every field has a default, so a
//! partial file (or no file at all) is valid; CLI flags override whatever
//! the file provides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::MealStepsError;

/// Public TheMealDB endpoint (free test key `1`).
pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// HTTP timeout used when the config does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const MAX_TIMEOUT_SECS: u64 = 120;

/// Application configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the recipe API, without a trailing `/`
    pub api_base_url: String,
    /// Per-request HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Apply CLI overrides on top of file/default values.
    pub fn with_overrides(mut self, api_base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(MealStepsError::config("API base URL must be specified"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(MealStepsError::config(
                "API base URL must start with http:// or https://",
            ));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(MealStepsError::config(format!(
                "Timeout must be between 1 and {} seconds",
                MAX_TIMEOUT_SECS
            )));
        }

        Ok(())
    }

    /// Base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }
}
