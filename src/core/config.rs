//! Configuration management for dashcheck
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/dashcheck/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{CheckError, Result};

/// Main configuration for dashcheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target dashboard configuration
    pub target: TargetConfig,
    /// Browser configuration
    pub browser: BrowserConfig,
    /// Output artifact configuration
    pub output: OutputConfig,
}

/// Target dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// URL of the dashboard under verification
    pub url: String,
    /// Whether to probe the URL over HTTP before launching a browser
    pub preflight: bool,
    /// Preflight probe timeout in seconds
    pub preflight_timeout_secs: u64,
}

/// Browser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether to run in headed mode (visible browser)
    pub headed: bool,
    /// Override path to the Chromium/Chrome executable
    #[serde(default)]
    pub executable: Option<PathBuf>,
    /// Visibility assertion timeout in ms
    pub wait_timeout_ms: u64,
    /// Visibility assertion poll interval in ms
    pub poll_interval_ms: u64,
}

/// Output artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory screenshots are written into
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: TargetConfig::default(),
            browser: BrowserConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: env::var("DASHCHECK_URL").unwrap_or_else(|_| "http://localhost:8081".to_string()),
            preflight: env::var("DASHCHECK_PREFLIGHT")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
            preflight_timeout_secs: 5,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headed: env::var("DASHCHECK_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            executable: env::var("DASHCHECK_CHROME").ok().map(PathBuf::from),
            wait_timeout_ms: 10_000,
            poll_interval_ms: 250,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: env::var("DASHCHECK_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("verification")),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dashcheck")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(CheckError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| CheckError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CheckError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| CheckError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CheckError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| CheckError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Validate the target URL
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.target.url)
            .map_err(|e| CheckError::config(format!("Invalid target URL: {}", e)))?;
        Ok(())
    }

    /// Visibility assertion timeout
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.browser.wait_timeout_ms)
    }

    /// Visibility assertion poll interval
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.browser.poll_interval_ms)
    }

    /// Preflight probe timeout
    pub fn preflight_timeout(&self) -> Duration {
        Duration::from_secs(self.target.preflight_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.target.url, "http://localhost:8081");
        assert!(config.target.preflight);
        assert!(!config.browser.headed);
        assert_eq!(config.browser.wait_timeout_ms, 10_000);
        assert_eq!(config.browser.poll_interval_ms, 250);
        assert_eq!(config.output.dir, PathBuf::from("verification"));
    }

    #[test]
    fn test_validate_accepts_default_url() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = Config::default();
        config.target.url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("url"));
        assert!(toml_str.contains("wait_timeout_ms"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.target.url, config.target.url);
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("dashcheck"));
    }

    #[test]
    fn test_durations() {
        let config = Config::default();
        assert_eq!(config.wait_timeout(), Duration::from_millis(10_000));
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.preflight_timeout(), Duration::from_secs(5));
    }
}
