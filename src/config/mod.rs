//
//  dockerhub
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Settings for the `dh` CLI, stored as TOML in a platform-specific
//! directory:
//!
//! - **Linux**: `~/.config/dh/config.toml`
//! - **macOS**: `~/Library/Application Support/dh/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\dh\config.toml`
//!
//! Setting `DH_CONFIG` points the CLI at a different file.
//!
//! ## Example Configuration File
//!
//! ```toml
//! username = "octocat"
//!
//! [api]
//! base_url = "https://hub.docker.com/v2"
//! timeout_secs = 60
//! ```
//!
//! Passwords are never written here. They come from `DOCKER_PASSWORD`,
//! `--password` or `--password-stdin`.

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

/// Docker Hub v2 API root.
pub const DEFAULT_BASE_URL: &str = "https://hub.docker.com/v2";

/// Overall timeout applied to every outbound request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "DH_CONFIG";

/// Top-level configuration for the CLI.
///
/// # Examples
///
/// ```rust
/// use dockerhub::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.api.base_url, "https://hub.docker.com/v2");
/// assert_eq!(config.api.timeout_secs, 60);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Default Docker ID, used when neither `--username` nor
    /// `DOCKER_USERNAME` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default)]
    pub api: ApiConfig,
}

/// Connection settings for the Docker Hub API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields [`Config::default`].
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads and validates the configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration to [`Config::config_path`].
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Path of the config file, honouring `DH_CONFIG`.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Checks that `base_url` is an absolute http(s) URL and the timeout is
    /// non-zero.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid base_url '{}'", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("base_url must use http or https, got '{}'", url.scheme());
        }
        if self.api.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Reads a key by name as a display string.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "username" => self.username.clone(),
            "base_url" => Some(self.api.base_url.clone()),
            "timeout_secs" => Some(self.api.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Sets a key by name. Returns `Ok(false)` for unknown keys.
    pub fn set(&mut self, key: &str, value: String) -> Result<bool> {
        match key {
            "username" => self.username = Some(value),
            "base_url" => self.api.base_url = value,
            "timeout_secs" => {
                self.api.timeout_secs = value
                    .parse()
                    .with_context(|| format!("timeout_secs must be a number, got '{}'", value))?
            }
            _ => return Ok(false),
        }
        self.validate()?;
        Ok(true)
    }

    /// Keys accepted by [`Config::get`] and [`Config::set`].
    pub fn keys() -> &'static [&'static str] {
        &["username", "base_url", "timeout_secs"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "username = \"alice\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("base_url", "http://localhost:5000/v2".to_string()).unwrap();
        config.set("timeout_secs", "15".to_string()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.base_url, "http://localhost:5000/v2");
        assert_eq!(loaded.api.timeout_secs, 15);
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"ftp://example.com\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = Config::default();
        assert!(!config.set("editor", "vim".to_string()).unwrap());
        assert!(config.set("timeout_secs", "0".to_string()).is_err());
        assert!(config.set("timeout_secs", "soon".to_string()).is_err());
    }
}
