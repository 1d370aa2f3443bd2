//! Notification capability handed to the editor.
//!
//! The editor never renders anything itself; it reports what happened through
//! a [`Notifier`] and the host decides how to show it (toasts in the browser,
//! log lines on the command line).

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

pub const MISSING_NAME: &str = "Please enter the segment name to proceed.";
pub const MISSING_SCHEMA: &str = "Please add atleast one schema to proceed.";
pub const SEND_SUCCEEDED: &str = "Segment data sent successfully!";
pub const SEND_FAILED: &str = "Failed to send data. Please try again.";

pub const DEFAULT_POSITION: &str = "bottom-right";
pub const DEFAULT_AUTO_CLOSE_MS: u64 = 3000;
pub const POSITIONS: &[&str] = &["top-left", "top-right", "bottom-left", "bottom-right"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);
}

/// Keeps every notification in order. Useful wherever the caller wants to
/// inspect what the editor reported.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Severity, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<(Severity, String)> {
        self.entries().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push((severity, message.to_string())),
            Err(poisoned) => poisoned.into_inner().push((severity, message.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Severity::Warning, MISSING_NAME);
        notifier.notify(Severity::Success, SEND_SUCCEEDED);

        assert_eq!(
            notifier.entries(),
            vec![
                (Severity::Warning, MISSING_NAME.to_string()),
                (Severity::Success, SEND_SUCCEEDED.to_string()),
            ]
        );
        assert_eq!(notifier.last().map(|(s, _)| s), Some(Severity::Success));
    }

    #[test]
    fn test_severity_serde() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(Severity::Warning.as_str(), "warning");
    }
}
