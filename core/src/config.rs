use crate::errors::{PremstatsError, PremstatsResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Backend origin used when nothing else is configured
pub const DEFAULT_BACKEND_API_URL: &str = "http://localhost:8000";

/// Number of past queries kept when no limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

pub const APP_NAME: &str = "premstats";

/// Configuration for the premstats client and terminal shell
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PremstatsConfig {
    pub backend_api_url: Option<String>,
    pub log_level: Option<String>,
    pub history_limit: Option<usize>,
    pub show_data: Option<bool>,
}

impl Default for PremstatsConfig {
    fn default() -> Self {
        Self {
            backend_api_url: Some(DEFAULT_BACKEND_API_URL.to_string()),
            log_level: Some("warn".to_string()),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            show_data: Some(false),
        }
    }
}

impl PremstatsConfig {
    /// A configuration with every field unset
    pub fn empty() -> Self {
        Self {
            backend_api_url: None,
            log_level: None,
            history_limit: None,
            show_data: None,
        }
    }

    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> PremstatsResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                PremstatsError::ConfigError(format!("Failed to read config file: {}", e))
            })?;

            let config: Self = toml::from_str(&content).map_err(|e| {
                PremstatsError::ConfigError(format!("Failed to parse config file: {}", e))
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to a file
    pub fn save_to_file(&self, path: &Path) -> PremstatsResult<()> {
        let content = toml::to_string(self).map_err(|e| {
            PremstatsError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PremstatsError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        fs::write(path, content).map_err(|e| {
            PremstatsError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Reads overrides from the process environment (after loading any `.env` file)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            backend_api_url: env::var("BACKEND_API_URL").ok(),
            log_level: env::var("PREMSTATS_LOG_LEVEL").ok(),
            ..Self::empty()
        }
    }

    /// Defaults, then the config file, then the environment
    pub fn load(config_path: Option<&Path>) -> PremstatsResult<Self> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => get_default_config_file(APP_NAME)?,
        };

        let file_config = Self::load_from_file(&path)?;
        Ok(Self::default()
            .merge(&file_config)
            .merge(&Self::from_env()))
    }

    /// Merges this config with another config, preferring values from the other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            backend_api_url: other
                .backend_api_url
                .clone()
                .or_else(|| self.backend_api_url.clone()),
            log_level: other.log_level.clone().or_else(|| self.log_level.clone()),
            history_limit: other.history_limit.or(self.history_limit),
            show_data: other.show_data.or(self.show_data),
        }
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> PremstatsResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        PremstatsError::ConfigError("Could not determine home directory".to_string())
    })?;

    Ok(home_dir.join(".config").join(app_name))
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> PremstatsResult<PathBuf> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = PremstatsConfig::load_from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, PremstatsConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = PremstatsConfig {
            backend_api_url: Some("https://api.premstats.xyz".to_string()),
            log_level: Some("debug".to_string()),
            history_limit: Some(3),
            show_data: Some(true),
        };
        config.save_to_file(&path).unwrap();

        let loaded = PremstatsConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_leaves_other_fields_unset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend_api_url = \"http://stats.internal:9000\"\n").unwrap();

        let loaded = PremstatsConfig::load_from_file(&path).unwrap();
        assert_eq!(
            loaded.backend_api_url.as_deref(),
            Some("http://stats.internal:9000")
        );
        assert_eq!(loaded.history_limit, None);
        assert_eq!(loaded.history_limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "history_limit = \"lots\"").unwrap();

        let err = PremstatsConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, PremstatsError::ConfigError(_)));
    }

    #[test]
    fn test_load_layers_environment_over_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "backend_api_url = \"http://from-file:8000\"\nhistory_limit = 4\nshow_data = true\n",
        )
        .unwrap();

        // Only this test touches these variables
        env::set_var("BACKEND_API_URL", "http://from-env:8000");
        env::set_var("PREMSTATS_LOG_LEVEL", "debug");
        let loaded = PremstatsConfig::load(Some(&path));
        env::remove_var("BACKEND_API_URL");
        env::remove_var("PREMSTATS_LOG_LEVEL");

        let loaded = loaded.unwrap();
        assert_eq!(loaded.backend_api_url.as_deref(), Some("http://from-env:8000"));
        assert_eq!(loaded.log_level.as_deref(), Some("debug"));
        assert_eq!(loaded.history_limit, Some(4));
        assert_eq!(loaded.show_data, Some(true));
    }

    #[test]
    fn test_merge_prefers_other_when_set() {
        let base = PremstatsConfig::default();
        let overrides = PremstatsConfig {
            backend_api_url: Some("http://10.0.0.5:8000".to_string()),
            show_data: Some(true),
            ..PremstatsConfig::empty()
        };

        let merged = base.merge(&overrides);
        assert_eq!(merged.backend_api_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(merged.show_data, Some(true));
        assert_eq!(merged.log_level.as_deref(), Some("warn"));
        assert_eq!(merged.history_limit, Some(DEFAULT_HISTORY_LIMIT));
    }
}
