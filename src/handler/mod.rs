//! Form submission handling.
//!
//! [`FormSubmissionHandler`] is the counterpart of the page script's submit
//! listener: it validates field presence and forwards submissions to the
//! email API, reporting each outcome through a [`Notifier`].

use crate::client::AsyncSendClient;
use crate::models::ContactForm;
use crate::notify::Notifier;
use std::sync::Arc;

/// Shown when one or more required fields are empty.
pub const MSG_FIELDS_REQUIRED: &str = "Please fill in all fields.";

/// Shown when validation passes.
pub const MSG_VALIDATED: &str = "Thank you for contacting ShefaFlow!";

/// Shown when the email API accepts the submission.
pub const MSG_SENT: &str = "Message sent successfully!";

/// Prefix of the failure notification; the serialized error payload follows.
pub const MSG_SEND_FAILED_PREFIX: &str = "Failed to send message: ";

/// Handles contact form submissions.
pub struct FormSubmissionHandler {
    client: Arc<dyn AsyncSendClient>,
    notifier: Arc<dyn Notifier>,
}

impl FormSubmissionHandler {
    pub fn new(client: Arc<dyn AsyncSendClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    /// Check that all three fields are filled in, notifying the user either way.
    ///
    /// Trimming is applied before the emptiness check, so a whitespace-only
    /// field counts as empty. Exactly one notification per call; no field is
    /// mutated and nothing is transmitted.
    pub fn validate_form(&self, form: &ContactForm) -> bool {
        if !form.is_complete() {
            self.notifier.notify(MSG_FIELDS_REQUIRED);
            return false;
        }
        self.notifier.notify(MSG_VALIDATED);
        true
    }

    /// Forward the form to the email API and report the outcome.
    ///
    /// Sends unconditionally: [`Self::validate_form`] is a separate entry
    /// point and is not invoked here, matching the page script this replaces.
    /// Exactly one send attempt and one notification per call; a failure is
    /// terminal for the attempt and the user must resubmit.
    pub async fn handle_submit(&self, form: &ContactForm) {
        match self.client.send_form(form).await {
            Ok(()) => {
                tracing::info!("Submission delivered");
                self.notifier.notify(MSG_SENT);
            }
            Err(e) => {
                tracing::error!("Submission failed: {}", e);
                self.notifier
                    .notify(&format!("{}{}", MSG_SEND_FAILED_PREFIX, e.payload_json()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SendApiError, SendApiResult};
    use crate::notify::RecordingNotifier;
    use async_trait::async_trait;

    /// Stub client resolving to a fixed outcome.
    struct StubSendClient {
        outcome: fn() -> SendApiResult<()>,
    }

    #[async_trait]
    impl AsyncSendClient for StubSendClient {
        async fn send_form(&self, _form: &ContactForm) -> SendApiResult<()> {
            (self.outcome)()
        }
    }

    fn handler_with(
        outcome: fn() -> SendApiResult<()>,
    ) -> (FormSubmissionHandler, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let handler = FormSubmissionHandler::new(
            Arc::new(StubSendClient { outcome }),
            notifier.clone(),
        );
        (handler, notifier)
    }

    #[test]
    fn test_validate_complete_form() {
        let (handler, notifier) = handler_with(|| Ok(()));
        let form = ContactForm::new("Jane", "jane@x.com", "Hi");

        assert!(handler.validate_form(&form));
        assert_eq!(notifier.messages(), vec![MSG_VALIDATED]);
    }

    #[test]
    fn test_validate_missing_name() {
        let (handler, notifier) = handler_with(|| Ok(()));
        let form = ContactForm::new("", "jane@x.com", "Hi");

        assert!(!handler.validate_form(&form));
        assert_eq!(notifier.messages(), vec![MSG_FIELDS_REQUIRED]);
    }

    #[test]
    fn test_validate_whitespace_only_name() {
        let (handler, notifier) = handler_with(|| Ok(()));
        let form = ContactForm::new("  ", "x", "y");

        assert!(!handler.validate_form(&form));
        assert_eq!(notifier.messages(), vec![MSG_FIELDS_REQUIRED]);
    }

    #[test]
    fn test_validate_notifies_exactly_once() {
        let (handler, notifier) = handler_with(|| Ok(()));

        handler.validate_form(&ContactForm::new("Jane", "jane@x.com", "Hi"));
        handler.validate_form(&ContactForm::new("", "", ""));
        assert_eq!(notifier.messages().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_success_notification() {
        let (handler, notifier) = handler_with(|| Ok(()));
        let form = ContactForm::new("Jane", "jane@x.com", "Hi");

        handler.handle_submit(&form).await;
        assert_eq!(notifier.messages(), vec![MSG_SENT]);
    }

    #[tokio::test]
    async fn test_submit_failure_embeds_error_payload() {
        let (handler, notifier) = handler_with(|| {
            Err(SendApiError::ApiError {
                status: 422,
                body: "{\"code\": 1}".to_string(),
            })
        });
        let form = ContactForm::new("Jane", "jane@x.com", "Hi");

        handler.handle_submit(&form).await;

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with(MSG_SEND_FAILED_PREFIX));
        assert!(messages[0].contains("{\"code\":1}"));
    }

    #[tokio::test]
    async fn test_submit_does_not_validate() {
        // Submission is independent of validation; an incomplete form is
        // still forwarded, matching the page script this replaces.
        let (handler, notifier) = handler_with(|| Ok(()));
        let form = ContactForm::new("", "", "");

        handler.handle_submit(&form).await;
        assert_eq!(notifier.messages(), vec![MSG_SENT]);
    }
}
