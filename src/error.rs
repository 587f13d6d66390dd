//! Error types for the ShefaFlow contact form handler.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the transactional email API.
#[derive(Error, Debug)]
pub enum SendApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {body}")]
    ApiError { status: u16, body: String },

    /// Failed to serialize the request payload
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// The public key was rejected
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl SendApiError {
    /// Compact JSON rendering of the failure, for user-facing messages.
    ///
    /// When the API returned a JSON body (e.g. `{"code":1}`), that body is
    /// surfaced verbatim in compact form. Anything else is wrapped in an
    /// `{"error": ...}` object so the notification always embeds valid JSON.
    pub fn payload_json(&self) -> String {
        if let SendApiError::ApiError { body, .. } = self {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
                if let Ok(compact) = serde_json::to_string(&value) {
                    return compact;
                }
            }
        }
        serde_json::json!({ "error": self.to_string() }).to_string()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SendApiError
pub type SendApiResult<T> = Result<T, SendApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
