use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanesConfig {
    /// Base URL of the service, scheme + host + port
    pub base_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Optional request timeout in seconds; unset leaves the transport
    /// default in place
    pub timeout_secs: Option<u64>,
}

impl Default for LanesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: crate::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl LanesConfig {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: LanesConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("lanes-client").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LanesConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = LanesConfig::default();
        config.base_url = "http://localhost:9090".to_string();
        config.timeout_secs = Some(30);

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: LanesConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.base_url, "http://localhost:9090");
        assert_eq!(parsed.timeout_secs, Some(30));
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let parsed: LanesConfig = toml::from_str("timeout_secs = 5\n").unwrap();
        assert_eq!(parsed.base_url, DEFAULT_BASE_URL);
        assert_eq!(parsed.user_agent, crate::DEFAULT_USER_AGENT);
        assert_eq!(parsed.timeout_secs, Some(5));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = LanesConfig::default();
        config.timeout_secs = Some(10);
        config.save_to(&path).unwrap();

        let loaded = LanesConfig::load_from(&path).unwrap();
        assert_eq!(loaded.timeout_secs, Some(10));
        assert_eq!(loaded.base_url, config.base_url);
    }
}
