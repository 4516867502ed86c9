use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Runtime settings, read from a JSON file when one is given
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Listings per results page
    pub page_size: usize,
    /// Delay before the filtered list is recomputed
    pub debounce_ms: u64,
    /// Simulated submission delay of the listing wizard
    pub submit_delay_ms: u64,
    /// Where client-side state such as search history is kept
    pub storage_dir: PathBuf,
    /// Listings file; the built-in demo listings are used when unset
    pub data_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            debounce_ms: 500,
            submit_delay_ms: 2000,
            storage_dir: Self::default_storage_dir(),
            data_file: None,
        }
    }
}

impl AppConfig {
    /// Load from `path`, or defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn default_storage_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hovmart")
    }

    pub fn default_path() -> PathBuf {
        Self::default_storage_dir().join("config.json")
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}
