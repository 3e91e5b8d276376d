use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_CONTENT_URL, DEFAULT_LOG_FILE, DEFAULT_REGISTRY_NAME,
    DEFAULT_REGISTRY_VERSION, DEFAULT_TIMEOUT_SECS,
};

/// Settings for the dapp store, persisted as YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the content endpoint (`{content_url}/api/content/{hash}/`)
    pub content_url: String,
    pub request_timeout_secs: u64,
    /// Name the dapp registry is looked up under
    pub registry_name: String,
    pub registry_version: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_url: String::from(DEFAULT_CONTENT_URL),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            registry_name: String::from(DEFAULT_REGISTRY_NAME),
            registry_version: String::from(DEFAULT_REGISTRY_VERSION),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Default config location: `~/.dappreg/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`; a missing or invalid file yields the defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_yaml::from_str::<Config>(&content)?;
        Ok(config)
    }

    /// Write the config as YAML, creating the parent directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// URL of the manifest stored under `hash`
    pub fn content_endpoint(&self, hash: &str) -> String {
        format!("{}/api/content/{}/", self.content_url.trim_end_matches('/'), hash)
    }
}
