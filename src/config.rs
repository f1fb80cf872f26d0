//! Configuration management for newschat
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from a YAML file, environment variables, and CLI overrides.

use crate::client::AskOptions;
use crate::error::{NewschatError, Result};
use crate::session::quick_actions::QuickAction;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for newschat
///
/// Holds the answer-service endpoint settings, the per-session defaults
/// the engine is constructed with, and the quick-action menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Answer service endpoint settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Conversation session settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Quick-action menu, in display order
    #[serde(default = "QuickAction::default_menu")]
    pub quick_actions: Vec<QuickAction>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            session: SessionConfig::default(),
            quick_actions: QuickAction::default_menu(),
        }
    }
}

/// Answer service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the news Q&A service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Conversation session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Greeting shown as the first message of every conversation
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Caller identity sent with every question
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Whether answers should cite source articles
    #[serde(default = "default_include_sources")]
    pub include_sources: bool,

    /// Number of articles retrieved as answer context (1..=20)
    #[serde(default = "default_context_limit")]
    pub context_limit: u32,
}

fn default_greeting() -> String {
    "Hi! I'm your financial news assistant. How can I help you today?".to_string()
}

fn default_user_id() -> String {
    crate::client::DEFAULT_USER_ID.to_string()
}

fn default_include_sources() -> bool {
    true
}

fn default_context_limit() -> u32 {
    crate::client::DEFAULT_CONTEXT_LIMIT
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            user_id: default_user_id(),
            include_sources: default_include_sources(),
            context_limit: default_context_limit(),
        }
    }
}

impl SessionConfig {
    /// Build the fixed request options the engine sends with every question
    ///
    /// # Examples
    ///
    /// ```
    /// use newschat::config::SessionConfig;
    ///
    /// let options = SessionConfig::default().ask_options();
    /// assert_eq!(options.user_id, "anonymous");
    /// assert_eq!(options.context_limit, 3);
    /// ```
    pub fn ask_options(&self) -> AskOptions {
        AskOptions {
            user_id: self.user_id.clone(),
            include_sources: self.include_sources,
            context_limit: self.context_limit,
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NewschatError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| NewschatError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("NEWSCHAT_SERVICE_URL") {
            self.service.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("NEWSCHAT_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.service.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid NEWSCHAT_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(user_id) = std::env::var("NEWSCHAT_USER_ID") {
            self.session.user_id = user_id;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.service.base_url = endpoint.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any setting is outside its supported range
    pub fn validate(&self) -> Result<()> {
        if self.service.base_url.is_empty() {
            return Err(NewschatError::Config("service.base_url cannot be empty".to_string()).into());
        }

        if !self.service.base_url.starts_with("http://")
            && !self.service.base_url.starts_with("https://")
        {
            return Err(NewschatError::Config(format!(
                "service.base_url must be an http(s) URL, got: {}",
                self.service.base_url
            ))
            .into());
        }

        if self.service.timeout_seconds == 0 {
            return Err(NewschatError::Config(
                "service.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.session.greeting.trim().is_empty() {
            return Err(
                NewschatError::Config("session.greeting cannot be empty".to_string()).into(),
            );
        }

        // The service rejects context limits outside 1..=20
        if self.session.context_limit == 0 || self.session.context_limit > 20 {
            return Err(NewschatError::Config(
                "session.context_limit must be between 1 and 20".to_string(),
            )
            .into());
        }

        for action in &self.quick_actions {
            if action.label.trim().is_empty() {
                return Err(NewschatError::Config(
                    "quick_actions entries must have a non-empty label".to_string(),
                )
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_override_cli() -> crate::cli::Cli {
        crate::cli::Cli {
            config: None,
            endpoint: None,
            command: None,
        }
    }

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.session.context_limit, 3);
        assert_eq!(config.quick_actions.len(), 4);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist.yaml", &no_override_cli()).unwrap();
        assert_eq!(config.session.user_id, "anonymous");
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
service:
  base_url: http://news.internal:9000
session:
  context_limit: 5
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.service.base_url, "http://news.internal:9000");
        assert_eq!(config.service.timeout_seconds, 30);
        assert_eq!(config.session.context_limit, 5);
        assert!(config.session.include_sources);
        assert_eq!(config.quick_actions.len(), 4);
    }

    #[test]
    fn test_cli_endpoint_override() {
        let cli = crate::cli::Cli {
            config: None,
            endpoint: Some("http://localhost:9999".to_string()),
            command: None,
        };
        let config = Config::load("does/not/exist.yaml", &cli).unwrap();
        assert_eq!(config.service.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.service.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = Config::default();
        config.service.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_context_limit() {
        let mut config = Config::default();
        config.session.context_limit = 0;
        assert!(config.validate().is_err());

        config.session.context_limit = 21;
        assert!(config.validate().is_err());

        config.session.context_limit = 20;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_greeting() {
        let mut config = Config::default();
        config.session.greeting = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ask_options_from_session_config() {
        let session = SessionConfig {
            user_id: "trader-7".to_string(),
            context_limit: 10,
            ..Default::default()
        };
        let options = session.ask_options();
        assert_eq!(options.user_id, "trader-7");
        assert_eq!(options.context_limit, 10);
        assert!(options.include_sources);
    }
}
