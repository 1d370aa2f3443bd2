use tracing::{error, info, warn};

use crate::domain::{Notifier, Severity};

/// Notifier for headless use: every notification becomes a log line.
pub struct LoggingNotifier {
    logger: &'static str,
}

impl LoggingNotifier {
    pub fn new() -> Self {
        Self { logger: "segment" }
    }
}

impl Default for LoggingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for LoggingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        let logger = self.logger;
        match severity {
            Severity::Success => info!(logger = logger, "{}", message),
            Severity::Warning => warn!(logger = logger, "{}", message),
            Severity::Error => error!(logger = logger, "{}", message),
        }
    }
}
