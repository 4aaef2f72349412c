//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Every field has a default, so the browser build runs on
//! `ClientConfig::default()` alone.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::dispatch::FeedbackWindows;

/// API base used by native front ends when nothing else is configured
pub const DEFAULT_NATIVE_API_URL: &str = "http://localhost:8000";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Activities service location
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Empty means same-origin relative URLs
    #[serde(default)]
    pub base_url: String,
}

/// Token persistence
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// localStorage key in the browser, file name natively
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Explicit token file (native only)
    pub token_path: Option<String>,
}

fn default_token_key() -> String {
    "authToken".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            token_path: None,
        }
    }
}

/// Feedback visibility windows
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_auth_window")]
    pub auth_window_ms: u64,

    #[serde(default = "default_roster_window")]
    pub roster_window_ms: u64,
}

fn default_auth_window() -> u64 {
    3000
}

fn default_roster_window() -> u64 {
    5000
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            auth_window_ms: default_auth_window(),
            roster_window_ms: default_roster_window(),
        }
    }
}

impl FeedbackConfig {
    pub fn windows(&self) -> FeedbackWindows {
        FeedbackWindows {
            auth: Duration::from_millis(self.auth_window_ms),
            roster: Duration::from_millis(self.roster_window_ms),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ACTIVITY_SIGNUP_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(path) = std::env::var("ACTIVITY_SIGNUP_TOKEN_PATH") {
            self.session.token_path = Some(path);
        }
        if let Ok(level) = std::env::var("ACTIVITY_SIGNUP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ACTIVITY_SIGNUP_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Where the native token store keeps the token
    #[cfg(feature = "native")]
    pub fn token_path(&self) -> PathBuf {
        if let Some(path) = &self.session.token_path {
            return PathBuf::from(path);
        }

        dirs::data_local_dir()
            .map(|p| p.join("activity-signup"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(&self.session.token_key)
    }
}

#[cfg(feature = "native")]
impl ClientConfig {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("activity-signup").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Activity Signup Configuration
#
# Environment variables override these settings:
# - ACTIVITY_SIGNUP_API_URL
# - ACTIVITY_SIGNUP_TOKEN_PATH
# - ACTIVITY_SIGNUP_LOG_LEVEL
# - ACTIVITY_SIGNUP_LOG_FORMAT

[api]
# Activities service URL (empty = same origin, browser only)
base_url = "http://localhost:8000"

[session]
# Storage key / file name for the session token
token_key = "authToken"

# Explicit token file (defaults to the local data directory)
# token_path = "/home/teacher/.local/share/activity-signup/authToken"

[feedback]
# How long login/logout messages stay visible (ms)
auth_window_ms = 3000

# How long signup/unregister messages stay visible (ms)
roster_window_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}
