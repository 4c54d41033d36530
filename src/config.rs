use crate::core::MatchMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Assistant
    pub wake_word: String,
    pub match_mode: MatchMode,
    pub tts_engine: String,
    pub browser_command: String,

    // HTTP API
    pub server_host: String,
    pub server_port: u16,

    // Remote services
    pub weather_api_key: String,
    pub weather_base_url: String,
    pub weather_units: String,
    pub wikipedia_base_url: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wake_word: "alexa".to_string(),
            match_mode: MatchMode::Substring,
            tts_engine: "console".to_string(),
            browser_command: "xdg-open".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            weather_api_key: "".to_string(),
            weather_base_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            weather_units: "metric".to_string(),
            wikipedia_base_url: "https://en.wikipedia.org/api/rest_v1".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path
    ///
    /// A missing file yields defaults. A file that fails to parse is moved
    /// aside to `config.json.corrupt` and defaults are used instead.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    let backup_path = path.with_extension("json.corrupt");
                    let _ = std::fs::rename(path, &backup_path);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("OPENWEATHER_API_KEY") {
            if !key.trim().is_empty() {
                self.weather_api_key = key.trim().to_string();
            }
        }
        if let Ok(word) = std::env::var("ASSISTKIT_WAKE_WORD") {
            if !word.trim().is_empty() {
                self.wake_word = word.trim().to_lowercase();
            }
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("assistkit")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.wake_word, "alexa");
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.weather_units, "metric");
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert!(config.weather_api_key.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: Config = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config.wake_word, restored.wake_word);
        assert_eq!(config.server_port, restored.server_port);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let restored: Config =
            serde_json::from_str(r#"{"server_port": 8080, "match_mode": "whole_word"}"#)
                .expect("Failed to deserialize");
        assert_eq!(restored.server_port, 8080);
        assert_eq!(restored.match_mode, MatchMode::WholeWord);
        assert_eq!(restored.wake_word, "alexa");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            server_port: 6123,
            browser_command: "firefox".to_string(),
            ..Config::default()
        };
        config.save_to(&path).expect("Failed to save");

        let loaded = Config::load_from(&path).expect("Failed to load");
        assert_eq!(loaded.server_port, 6123);
        assert_eq!(loaded.browser_command, "firefox");
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").expect("Failed to write");

        let loaded = Config::load_from(&path).expect("Corrupt config should degrade");
        assert_eq!(loaded.server_port, 5000);
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_env_overrides() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"wake_word": "jarvis", "weather_api_key": "from-file"}"#)
            .expect("Failed to write");

        std::env::set_var("OPENWEATHER_API_KEY", " env-key ");
        std::env::set_var("ASSISTKIT_WAKE_WORD", "Computer");
        let loaded = Config::load_from(&path);
        std::env::remove_var("OPENWEATHER_API_KEY");
        std::env::remove_var("ASSISTKIT_WAKE_WORD");

        let loaded = loaded.expect("Failed to load");
        assert_eq!(loaded.weather_api_key, "env-key");
        assert_eq!(loaded.wake_word, "computer");

        let plain = Config::load_from(&path).expect("Failed to load");
        assert_eq!(plain.weather_api_key, "from-file");
        assert_eq!(plain.wake_word, "jarvis");
    }
}
