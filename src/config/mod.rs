//! Configuration module for shelfr
//!
//! Manages application configuration: the catalog endpoint, page size, and
//! request timeout. Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://fakestoreapi.com/products".to_string()
}

const fn default_items_per_page() -> usize {
    crate::catalog::DEFAULT_ITEMS_PER_PAGE
}

const fn default_timeout_secs() -> u64 {
    10
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShelfrConfig {
    /// Endpoint returning the product collection as a JSON array
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Number of products per page in list output and the TUI
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Request timeout for the catalog fetch, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for ShelfrConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            items_per_page: default_items_per_page(),
            timeout_secs: default_timeout_secs(),
            quiet: false,
        }
    }
}

impl ShelfrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("shelfr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Set a config value by key, as used by `shelfr config set KEY=VALUE`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values that do not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "api_url" => self.api_url = value.to_string(),
            "items_per_page" => {
                self.items_per_page = value.parse().map_err(|_| {
                    ConfigError::Message(format!("items_per_page must be a number, got '{value}'"))
                })?;
            }
            "timeout_secs" => {
                self.timeout_secs = value.parse().map_err(|_| {
                    ConfigError::Message(format!("timeout_secs must be a number, got '{value}'"))
                })?;
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!("quiet must be true or false, got '{value}'"))
                })?;
            }
            _ => {
                return Err(ConfigError::Message(format!("Unknown config key '{key}'")));
            }
        }
        Ok(())
    }

    /// Get a config value by key as a display string
    #[must_use]
    pub fn get_value(&self, key: &str) -> Option<String> {
        match key {
            "api_url" => Some(self.api_url.clone()),
            "items_per_page" => Some(self.items_per_page.to_string()),
            "timeout_secs" => Some(self.timeout_secs.to_string()),
            "quiet" => Some(self.quiet.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShelfrConfig::default();
        assert_eq!(config.api_url, "https://fakestoreapi.com/products");
        assert_eq!(config.items_per_page, 5);
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.quiet);
    }

    #[test]
    fn test_timeout_conversion() {
        let config = ShelfrConfig {
            timeout_secs: 3,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_set_and_get_value() {
        let mut config = ShelfrConfig::default();

        config.set_value("api_url", "http://localhost:8080/products").unwrap();
        assert_eq!(
            config.get_value("api_url").as_deref(),
            Some("http://localhost:8080/products")
        );

        config.set_value("items_per_page", "12").unwrap();
        assert_eq!(config.items_per_page, 12);

        config.set_value("quiet", "true").unwrap();
        assert!(config.quiet);
    }

    #[test]
    fn test_set_unknown_key_fails() {
        let mut config = ShelfrConfig::default();
        assert!(config.set_value("nope", "1").is_err());
        assert_eq!(config.get_value("nope"), None);
    }

    #[test]
    fn test_set_non_numeric_page_size_fails() {
        let mut config = ShelfrConfig::default();
        assert!(config.set_value("items_per_page", "many").is_err());
        assert_eq!(config.items_per_page, 5);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ShelfrConfig {
            api_url: "http://localhost:9999/products".to_string(),
            items_per_page: 8,
            timeout_secs: 2,
            quiet: true,
        };

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: ShelfrConfig = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.api_url, config.api_url);
        assert_eq!(parsed.items_per_page, 8);
        assert_eq!(parsed.timeout_secs, 2);
        assert!(parsed.quiet);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: ShelfrConfig = toml::from_str("quiet = true\n").unwrap();
        assert!(parsed.quiet);
        assert_eq!(parsed.api_url, "https://fakestoreapi.com/products");
        assert_eq!(parsed.items_per_page, 5);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"http://localhost:7777/products\"\nitems_per_page = 3\n",
        )
        .unwrap();

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()
            .unwrap();
        let parsed: ShelfrConfig = settings.try_deserialize().unwrap();

        assert_eq!(parsed.api_url, "http://localhost:7777/products");
        assert_eq!(parsed.items_per_page, 3);
        assert_eq!(parsed.timeout_secs, 10);
    }
}
