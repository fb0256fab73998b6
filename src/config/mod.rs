//! Configuration, read from `~/.config/devlife/config.toml` at startup.
//!
//! If the file doesn't exist, a commented default one is created. Missing
//! fields fall back to defaults.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::app::{DevLifeError, Result};

pub const DEFAULT_BASE_URL: &str = "https://developerslife.ru";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout handed to the HTTP client.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating a commented
    /// default file on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DevLifeError::Config(format!("{}: {e}", config_path.display()))
        })?;

        Ok(config)
    }

    /// `~/.config/devlife/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DevLifeError::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("devlife").join("config.toml"))
    }

    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    fn create_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(path)?;
        file.write_all(Self::default_config_content().as_bytes())?;

        Ok(())
    }

    fn default_config_content() -> String {
        format!(
            r#"# devlife configuration

# API root. Pages are fetched from {{base_url}}/{{section}}/{{page}}?json=true
base_url = "{DEFAULT_BASE_URL}"

# Per-request timeout, in seconds.
timeout_secs = {DEFAULT_TIMEOUT_SECS}
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://developerslife.ru");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.base_url().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("timeout_secs = 30").unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_content_round_trips() {
        let config: Config = toml::from_str(&Config::default_config_content()).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = Config {
            base_url: "not a url".into(),
            ..Config::default()
        };
        assert!(matches!(
            config.base_url(),
            Err(DevLifeError::InvalidUrl(_))
        ));
    }
}
