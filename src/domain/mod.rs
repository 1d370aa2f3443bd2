use async_trait::async_trait;

pub mod catalog;
pub mod editor;
pub mod error;
pub mod notification;
pub mod payload;

pub use catalog::{Indicator, SchemaOption, TraitKind, CATALOG};
pub use editor::{SegmentEditor, Submission, SubmitOutcome, SubmitTicket};
pub use error::{EditError, SubmitError, ValidationError};
pub use notification::{Notifier, RecordingNotifier, Severity};
pub use payload::{SchemaEntry, SegmentPayload};

/// Endpoint segments are sent to when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://webhook.site/1afb8bb7-1028-4619-a2b2-f90039295aaf";

/// Destination for a finished segment.
#[async_trait]
pub trait SegmentSink: Send + Sync {
    async fn send(&self, payload: &SegmentPayload) -> Result<(), SubmitError>;
}
