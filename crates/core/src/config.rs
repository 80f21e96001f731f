//! Configuration management for PolicyQA.
//!
//! Configuration is resolved once at process start:
//! - Environment variables
//! - Command-line flags (which take precedence)
//!
//! The gateway itself only ever sees the answering-service base address,
//! handed to it through an explicit config object.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Environment variable selecting the answering-service base address.
pub const API_BASE_ENV: &str = "POLICYQA_API_BASE";

/// Development default for the answering service.
pub const DEFAULT_API_BASE: &str = "http://localhost:8001";

/// Default address the gateway listens on.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

/// Default gateway URL used by the console.
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:3000";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base address of the answering service (the gateway appends `/ask`)
    pub api_base: String,

    /// Socket address the gateway binds to
    pub listen: String,

    /// Gateway base URL the console posts questions to
    pub gateway_url: String,

    /// Optional caller-side timeout for one ask, in seconds
    pub timeout_secs: Option<u64>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            listen: DEFAULT_LISTEN.to_string(),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            timeout_secs: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `POLICYQA_API_BASE`: Answering-service base address
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// Empty values are treated as unset.
    ///
    /// # Example
    /// ```no_run
    /// use policyqa_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Backend: {}", config.api_base);
    /// ```
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(base) = non_empty_env(API_BASE_ENV) {
            config.api_base = base;
        }

        config.log_level = non_empty_env("RUST_LOG");

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        api_base: Option<String>,
        listen: Option<String>,
        gateway_url: Option<String>,
        timeout_secs: Option<u64>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(api_base) = api_base {
            self.api_base = api_base;
        }

        if let Some(listen) = listen {
            self.listen = listen;
        }

        if let Some(gateway_url) = gateway_url {
            self.gateway_url = gateway_url;
        }

        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// The per-ask timeout, if one was configured.
    pub fn ask_timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Parse the gateway listen address.
    pub fn listen_addr(&self) -> AppResult<SocketAddr> {
        self.listen.parse().map_err(|e| {
            AppError::Config(format!("Invalid listen address '{}': {}", self.listen, e))
        })
    }

    /// Validate URLs and numeric settings.
    pub fn validate(&self) -> AppResult<()> {
        validate_http_endpoint(API_BASE_ENV, &self.api_base)?;
        validate_http_endpoint("gateway URL", &self.gateway_url)?;
        self.listen_addr()?;

        if self.timeout_secs == Some(0) {
            return Err(AppError::Config(
                "Timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

/// Reads an environment variable, ignoring unset or blank values.
fn non_empty_env(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
pub fn validate_http_endpoint(name: &str, value: &str) -> AppResult<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "{} must start with http:// or https:// (got '{}')",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "http://localhost:8001");
        assert_eq!(config.listen, "127.0.0.1:3000");
        assert_eq!(config.gateway_url, "http://127.0.0.1:3000");
        assert!(config.timeout_secs.is_none());
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            Some("https://rag.example.edu".to_string()),
            Some("0.0.0.0:8080".to_string()),
            None,
            Some(30),
            None,
            true,
            false,
        );

        assert_eq!(overridden.api_base, "https://rag.example.edu");
        assert_eq!(overridden.listen, "0.0.0.0:8080");
        assert_eq!(overridden.gateway_url, "http://127.0.0.1:3000");
        assert_eq!(overridden.ask_timeout(), Some(Duration::from_secs(30)));
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_explicit_log_level_beats_verbose() {
        let config = AppConfig::default().with_overrides(
            None,
            None,
            None,
            None,
            Some("trace".to_string()),
            true,
            false,
        );
        assert_eq!(config.log_level, Some("trace".to_string()));
    }

    #[test]
    fn test_validate_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_schemeless_base() {
        let config = AppConfig {
            api_base: "localhost:8001".to_string(),
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(API_BASE_ENV));
    }

    #[test]
    fn test_validate_rejects_bad_listen() {
        let config = AppConfig {
            listen: "not-an-address".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = AppConfig {
            timeout_secs: Some(0),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
