//! Contact form submission model and its wire representation.

use serde::Serialize;

/// A single contact form submission.
///
/// Constructed fresh from the form fields at submit time and discarded once
/// the send attempt resolves. Fields are kept as entered; trimming happens
/// in [`ContactForm::is_complete`], not at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender's name
    pub name: String,

    /// Sender's email address (no format validation is performed)
    pub email: String,

    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Build a form from the three raw field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Whether all three fields are non-empty after trimming.
    ///
    /// A whitespace-only field counts as empty.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Template variables forwarded to the email API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    /// Sender's name
    pub name: String,

    /// Sender's email address
    pub email: String,

    /// Message body
    pub message: String,
}

impl From<&ContactForm> for TemplateParams {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
        }
    }
}

/// Request body for the email API's `email/send` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SendFormRequest {
    /// Email service identifier
    pub service_id: String,

    /// Email template identifier
    pub template_id: String,

    /// Publishable client key
    pub user_id: String,

    /// Form field values rendered into the template
    pub template_params: TemplateParams,
}

impl SendFormRequest {
    /// Assemble the wire request for a form submission.
    pub fn new(service_id: &str, template_id: &str, user_id: &str, form: &ContactForm) -> Self {
        Self {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            user_id: user_id.to_string(),
            template_params: TemplateParams::from(form),
        }
    }
}
