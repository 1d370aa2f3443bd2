//! Segment editor state machine.
//!
//! All state for one editing session lives in [`SegmentEditor`]. Every
//! transition is a plain method so the front end only has to wire events to
//! calls; the only asynchronous step is handing the payload to a
//! [`SegmentSink`] between [`SegmentEditor::begin_submit`] and
//! [`SegmentEditor::finish_submit`].
//!
//! Every reset starts a new draft generation. A submission carries the
//! generation it was taken from, so a response that arrives after the user
//! cancelled is reported but never touches the draft that replaced it.

use tracing::{debug, error, info, warn};

use super::catalog::{self, SchemaOption};
use super::error::{EditError, SubmitError, ValidationError};
use super::notification::{self, Notifier, Severity};
use super::payload::{SchemaEntry, SegmentPayload};
use super::SegmentSink;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Endpoint accepted the segment; the editor was closed.
    Sent,
    /// Validation failed; nothing was sent.
    Rejected(ValidationError),
    /// The request failed; the draft is untouched.
    Failed(SubmitError),
    /// A request is already outstanding.
    Busy,
}

/// Identifies the draft a submission was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// A validated payload waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: SubmitTicket,
    pub payload: SegmentPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentEditor {
    visible: bool,
    name: String,
    selected: Vec<String>,
    pending: String,
    generation: u64,
    in_flight: bool,
}

impl SegmentEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An open editor holding `name` and `values`, in order. Fails on the
    /// first value `add_selection` refuses.
    pub fn draft<S: AsRef<str>>(name: impl Into<String>, values: &[S]) -> Result<Self, EditError> {
        let mut editor = Self::new();
        editor.open();
        editor.set_name(name);
        for value in values {
            editor.add_selection(value.as_ref())?;
        }
        Ok(editor)
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Value currently picked in the add row, not yet committed.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Discard the draft and hide the surface.
    pub fn close(&mut self) {
        self.reset();
        self.visible = false;
    }

    /// Start a fresh draft. A request still outstanding for the old draft
    /// no longer blocks submitting the new one.
    pub fn reset(&mut self) {
        self.name.clear();
        self.selected.clear();
        self.pending.clear();
        self.generation += 1;
        self.in_flight = false;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_pending(&mut self, value: impl Into<String>) {
        self.pending = value.into();
    }

    /// Append a field to the selection. The pending add-row value is cleared
    /// only when the field is accepted.
    pub fn add_selection(&mut self, value: &str) -> Result<(), EditError> {
        if value.is_empty() {
            return Err(EditError::Empty);
        }
        if catalog::find(value).is_none() {
            return Err(EditError::UnknownField(value.to_string()));
        }
        if self.selected.iter().any(|s| s == value) {
            return Err(EditError::Duplicate(value.to_string()));
        }
        self.selected.push(value.to_string());
        self.pending.clear();
        Ok(())
    }

    /// Commit whatever is picked in the add row.
    pub fn add_pending(&mut self) -> Result<(), EditError> {
        let value = self.pending.clone();
        self.add_selection(&value)
    }

    /// Replace the field at `index`. A value already selected in another row
    /// is refused so the list stays duplicate free even if a caller offers
    /// the wrong options.
    pub fn change_selection(&mut self, index: usize, value: &str) -> Result<(), EditError> {
        if index >= self.selected.len() {
            return Err(EditError::IndexOutOfRange(index));
        }
        if catalog::find(value).is_none() {
            return Err(EditError::UnknownField(value.to_string()));
        }
        let taken = self
            .selected
            .iter()
            .enumerate()
            .any(|(i, s)| i != index && s == value);
        if taken {
            return Err(EditError::Duplicate(value.to_string()));
        }
        self.selected[index] = value.to_string();
        self.pending.clear();
        Ok(())
    }

    /// Returns false when `value` was not selected.
    pub fn remove_selection(&mut self, value: &str) -> bool {
        match self.selected.iter().position(|s| s == value) {
            Some(index) => {
                self.selected.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn available_options(&self) -> Vec<&'static SchemaOption> {
        catalog::available_options(&self.selected)
    }

    pub fn row_options(&self, own: &str) -> Vec<&'static SchemaOption> {
        catalog::row_options(&self.selected, own)
    }

    /// The add row disappears once every catalog field is selected.
    pub fn shows_add_row(&self) -> bool {
        !self.available_options().is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.selected.is_empty() {
            return Err(ValidationError::EmptySchema);
        }
        Ok(())
    }

    pub fn payload(&self) -> SegmentPayload {
        SegmentPayload {
            segment_name: self.name.clone(),
            schema: self
                .selected
                .iter()
                .filter_map(|value| catalog::find(value))
                .map(SchemaEntry::from)
                .collect(),
        }
    }

    /// Validate and mark the draft busy. On success the caller owns sending
    /// the payload and must report back through `finish_submit` with the
    /// submission's ticket.
    pub fn begin_submit(&mut self, notifier: &dyn Notifier) -> Result<Submission, SubmitOutcome> {
        if self.in_flight {
            debug!("Submit ignored, a request is already outstanding");
            return Err(SubmitOutcome::Busy);
        }
        if let Err(e) = self.validate() {
            warn!("Segment not submitted: {}", e);
            notifier.notify(Severity::Warning, &e.to_string());
            return Err(SubmitOutcome::Rejected(e));
        }

        let payload = self.payload();
        match serde_json::to_string(&payload) {
            Ok(body) => debug!("Segment payload: {}", body),
            Err(e) => debug!("Segment payload not printable: {}", e),
        }
        self.in_flight = true;
        Ok(Submission {
            ticket: SubmitTicket(self.generation),
            payload,
        })
    }

    /// Report the result of a submission. A ticket from an earlier draft is
    /// only notified; the current draft is left as it is.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), SubmitError>,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        let current = ticket.0 == self.generation;
        if current {
            self.in_flight = false;
        } else {
            debug!("Result arrived for a discarded draft");
        }
        match result {
            Ok(()) => {
                info!("Segment sent");
                notifier.notify(Severity::Success, notification::SEND_SUCCEEDED);
                if current {
                    self.close();
                }
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Failed to send segment: {}", e);
                notifier.notify(Severity::Error, notification::SEND_FAILED);
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub async fn submit(&mut self, sink: &dyn SegmentSink, notifier: &dyn Notifier) -> SubmitOutcome {
        let submission = match self.begin_submit(notifier) {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };
        let result = sink.send(&submission.payload).await;
        self.finish_submit(submission.ticket, result, notifier)
    }
}
