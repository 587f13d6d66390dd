//! Data structures for contact form submissions.

mod form;

pub use form::{ContactForm, SendFormRequest, TemplateParams};
