//! ShefaFlow Contact - contact form handling for the ShefaFlow site.
//!
//! This library validates contact form submissions and forwards them to a
//! third-party transactional email API, surfacing each outcome to the user
//! through a one-shot notification.
//!
//! # Architecture
//!
//! - **models**: Contact form data and its wire representation
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the email send API
//! - **notify**: User-facing one-shot notifications
//! - **handler**: Form validation and submission handling
//! - **metrics**: Request counters for the client

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod models;
pub mod notify;

pub use client::{AsyncSendClient, AsyncSendClientImpl, SendClient};
pub use config::Config;
pub use error::{ConfigError, SendApiError};
pub use handler::{
    FormSubmissionHandler, MSG_FIELDS_REQUIRED, MSG_SEND_FAILED_PREFIX, MSG_SENT, MSG_VALIDATED,
};
pub use metrics::Metrics;
pub use models::{ContactForm, SendFormRequest, TemplateParams};
pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier};
