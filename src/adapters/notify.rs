//! Notifier adapter backed by structured logging.

use tracing::{error, info};

use crate::ports::Notifier;

/// Notifier that records notifications in the log stream.
///
/// Stands in wherever no interactive notification surface is wired up;
/// headless callers and tools get the messages through `tracing`.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notification = "success", "{message}");
    }

    fn error(&self, message: &str) {
        error!(notification = "error", "{message}");
    }
}
