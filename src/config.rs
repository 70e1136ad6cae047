//! Client configuration
//!
//! Loaded from `shakti.toml` when present, then overridden by environment
//! variables (`.env` is read first):
//!
//! | Variable            | Field                 |
//! |---------------------|-----------------------|
//! | `SHAKTI_API_BASE`   | `api.base_url`        |
//! | `SHAKTI_TOKEN_FILE` | `session.token_file`  |
//! | `SHAKTI_LOG`        | `logging.level`       |

use crate::api::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where the terminal client keeps the token. Defaults to the user's
    /// config directory.
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(feature = "cli")]
pub use loader::ConfigError;

#[cfg(feature = "cli")]
mod loader {
    use super::ClientConfig;
    use std::path::{Path, PathBuf};
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("Failed to read config file: {0}")]
        Io(#[from] std::io::Error),

        #[error("Failed to parse config file: {0}")]
        Parse(#[from] toml::de::Error),

        #[error("Invalid configuration: {0}")]
        Invalid(String),
    }

    impl ClientConfig {
        /// Load `path` if it exists, apply environment overrides and validate.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            dotenvy::dotenv().ok();

            let path = path.as_ref();
            let mut config = if path.exists() {
                let content = std::fs::read_to_string(path)?;
                toml::from_str::<ClientConfig>(&content)?
            } else {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                ClientConfig::default()
            };

            config.apply_env(|key| std::env::var(key).ok());
            config.validate()?;
            Ok(config)
        }

        /// Apply overrides from a variable lookup.
        pub fn apply_env<F>(&mut self, lookup: F)
        where
            F: Fn(&str) -> Option<String>,
        {
            if let Some(base) = lookup("SHAKTI_API_BASE") {
                self.api.base_url = base;
            }
            if let Some(file) = lookup("SHAKTI_TOKEN_FILE") {
                self.session.token_file = Some(PathBuf::from(file));
            }
            if let Some(level) = lookup("SHAKTI_LOG") {
                self.logging.level = level;
            }
        }

        pub fn validate(&self) -> Result<(), ConfigError> {
            let base = self.api.base_url.trim();
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "api.base_url must be an http(s) URL, got '{}'",
                    self.api.base_url
                )));
            }
            if self.api.timeout_secs == 0 {
                return Err(ConfigError::Invalid(
                    "api.timeout_secs must be greater than zero".to_string(),
                ));
            }
            Ok(())
        }

        /// Token file location, falling back to `<config dir>/shakti/token`.
        pub fn token_path(&self) -> PathBuf {
            self.session.token_file.clone().unwrap_or_else(|| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("shakti")
                    .join("token")
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.logging.level, "warn");
        assert!(config.session.token_file.is_none());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_partial_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://shakti.internal:8443"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://shakti.internal:8443");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_env_overrides() {
        let mut config = ClientConfig::default();
        config.apply_env(|key| match key {
            "SHAKTI_API_BASE" => Some("http://10.0.0.5:8000".to_string()),
            "SHAKTI_TOKEN_FILE" => Some("/tmp/shakti-token".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.token_path(), PathBuf::from("/tmp/shakti-token"));
        assert_eq!(config.logging.level, "warn");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_validate_rejects_bad_base() {
        let mut config = ClientConfig::default();
        config.api.base_url = "localhost:8000".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
