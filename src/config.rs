//! Configuration for the ShefaFlow contact form handler.
//!
//! The original client script initialized the email SDK once at startup with a
//! publishable key and hard-coded service/template identifiers. Here that
//! one-time setup is modeled as environment configuration, loaded exactly once
//! before any submission is handled.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL for the transactional email API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.emailjs.com";

/// Configuration for the contact form handler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the email API
    pub api_base_url: String,

    /// Publishable (non-secret) client key
    pub public_key: String,

    /// Email service identifier
    pub service_id: String,

    /// Email template identifier
    pub template_id: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SHEFAFLOW_PUBLIC_KEY`: publishable client key for the email API
    /// - `SHEFAFLOW_SERVICE_ID`: email service identifier
    /// - `SHEFAFLOW_TEMPLATE_ID`: email template identifier
    ///
    /// Optional environment variables:
    /// - `SHEFAFLOW_API_BASE_URL`: API base URL (default: `https://api.emailjs.com`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_base_url =
            env::var("SHEFAFLOW_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SHEFAFLOW_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let public_key = Self::required_non_empty("SHEFAFLOW_PUBLIC_KEY")?;
        let service_id = Self::required_non_empty("SHEFAFLOW_SERVICE_ID")?;
        let template_id = Self::required_non_empty("SHEFAFLOW_TEMPLATE_ID")?;

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            public_key,
            service_id,
            template_id,
            request_timeout,
            log_level,
        })
    }

    /// Read a required environment variable, rejecting empty values.
    fn required_non_empty(var_name: &str) -> ConfigResult<String> {
        let value =
            env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;

        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(value)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            public_key: String::new(),
            service_id: String::new(),
            template_id: String::new(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
