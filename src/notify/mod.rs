//! User-facing notifications.
//!
//! The original interface surfaced outcomes through blocking alert dialogs.
//! Here that is a [`Notifier`] capability: a one-shot, synchronous,
//! side-effect-only message display, so the handler can be tested without a
//! real UI.

use std::sync::Mutex;

/// One-shot user-facing message display.
pub trait Notifier: Send + Sync {
    /// Show a single message to the user.
    fn notify(&self, message: &str);
}

/// Notifier that writes each message as one line to stdout.
///
/// The terminal stand-in for a modal dialog. Logging stays on stderr, so
/// stdout carries only what the user is meant to read.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

/// Notifier that records messages in order, for use in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
