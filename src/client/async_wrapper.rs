//! Async wrapper around the synchronous SendClient.
//!
//! This module provides an async interface to the synchronous SendClient by
//! using `tokio::task::spawn_blocking` to run HTTP operations on a dedicated
//! thread pool, preventing blocking of the async runtime. The submit path
//! suspends on the send call and resumes on success or failure.

use crate::client::SendClient;
use crate::error::{SendApiError, SendApiResult};
use crate::models::ContactForm;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the email send API.
///
/// Abstracting the client behind a trait lets the form handler be exercised
/// against a stub in tests, with no HTTP involved.
#[async_trait]
pub trait AsyncSendClient: Send + Sync {
    /// Forward a contact form to the email API, resolving to success or failure.
    async fn send_form(&self, form: &ContactForm) -> SendApiResult<()>;
}

/// Async wrapper around the synchronous SendClient.
#[derive(Clone)]
pub struct AsyncSendClientImpl {
    client: Arc<SendClient>,
}

impl AsyncSendClientImpl {
    pub fn new(client: SendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncSendClient for AsyncSendClientImpl {
    async fn send_form(&self, form: &ContactForm) -> SendApiResult<()> {
        let client = self.client.clone();
        let form = form.clone();

        tokio::task::spawn_blocking(move || client.send_form(&form))
            .await
            .map_err(|e| SendApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
