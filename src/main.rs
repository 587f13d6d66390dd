//! ShefaFlow Contact - Main entry point
//!
//! Terminal harness for the contact form: prompts for the three fields,
//! validates them, and forwards the submission to the email API.

use anyhow::Result;
use shefaflow_contact::{
    AsyncSendClient, AsyncSendClientImpl, Config, ConsoleNotifier, ContactForm,
    FormSubmissionHandler, Notifier, SendClient,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Greeting shown once at startup.
const MSG_WELCOME: &str = "Welcome to ShefaFlow!";

/// Prompt for one form field on stdin.
fn read_field(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut value = String::new();
    io::stdin().lock().read_line(&mut value)?;
    Ok(value.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only, keeping stdout for the user)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting ShefaFlow contact form with API URL: {}",
        config.api_base_url
    );

    // One-time client setup; no teardown
    let sync_client = SendClient::new(&config);
    let client = Arc::new(AsyncSendClientImpl::new(sync_client)) as Arc<dyn AsyncSendClient>;
    let notifier = Arc::new(ConsoleNotifier::new()) as Arc<dyn Notifier>;

    notifier.notify(MSG_WELCOME);

    let form = ContactForm::new(
        read_field("Name")?,
        read_field("Email")?,
        read_field("Message")?,
    );

    let handler = FormSubmissionHandler::new(client, notifier);

    // The library keeps validation and submission independent; this harness
    // chooses to gate submission on a passing validation.
    if !handler.validate_form(&form) {
        return Ok(());
    }

    handler.handle_submit(&form).await;

    info!("Submission handled, exiting");
    Ok(())
}
