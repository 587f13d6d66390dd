//! HTTP client for the transactional email API.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles request
//! assembly, authentication via the publishable key, and error mapping.

mod async_wrapper;
pub use async_wrapper::{AsyncSendClient, AsyncSendClientImpl};

use crate::config::Config;
use crate::error::{SendApiError, SendApiResult};
use crate::metrics::Metrics;
use crate::models::{ContactForm, SendFormRequest};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Path of the send endpoint, relative to the API base URL.
const SEND_PATH: &str = "/api/v1.0/email/send";

/// HTTP client for the transactional email API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct SendClient {
    /// Base URL for the email API
    base_url: String,

    /// Publishable client key
    public_key: String,

    /// Email service identifier
    service_id: String,

    /// Email template identifier
    template_id: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl SendClient {
    /// Create a new SendClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            public_key: config.public_key.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a SendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(
        base_url: String,
        public_key: String,
        service_id: String,
        template_id: String,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            public_key,
            service_id,
            template_id,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with a JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, SendApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
            }
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Map a ureq error to a SendApiError.
    fn map_error(&self, error: ureq::Error) -> SendApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => SendApiError::Unauthorized,
                    429 => SendApiError::RateLimitExceeded,
                    _ => SendApiError::ApiError { status: code, body },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SendApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SendApiError::Timeout
                } else {
                    SendApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Forward a contact form to the email API.
    ///
    /// Exactly one request is made; there is no retry.
    pub fn send_form(&self, form: &ContactForm) -> SendApiResult<()> {
        tracing::info!("Sending contact form for: {}", form.email);

        let request =
            SendFormRequest::new(&self.service_id, &self.template_id, &self.public_key, form);
        let body = serde_json::to_value(&request).map_err(SendApiError::JsonError)?;

        self.post(SEND_PATH, &body)?;

        self.metrics.record_form_sent();
        tracing::info!("Contact form sent successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> SendClient {
        SendClient::with_base_url(
            base_url.to_string(),
            "pk_test".to_string(),
            "service_test".to_string(),
            "template_test".to_string(),
        )
    }

    #[test]
    fn test_build_url() {
        let client = test_client("https://api.example.com");
        assert_eq!(
            client.build_url("/api/v1.0/email/send"),
            "https://api.example.com/api/v1.0/email/send"
        );
        assert_eq!(
            client.build_url("api/v1.0/email/send"),
            "https://api.example.com/api/v1.0/email/send"
        );

        let client_with_slash = test_client("https://api.example.com/");
        assert_eq!(
            client_with_slash.build_url("/api/v1.0/email/send"),
            "https://api.example.com/api/v1.0/email/send"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            api_base_url: "https://api.emailjs.com".to_string(),
            public_key: "pk_live_123".to_string(),
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            request_timeout: 10,
            log_level: "error".to_string(),
        };

        let client = SendClient::new(&config);
        assert_eq!(client.base_url, "https://api.emailjs.com");
        assert_eq!(client.public_key, "pk_live_123");
        assert_eq!(client.service_id, "service_abc");
        assert_eq!(client.template_id, "template_xyz");
    }
}
