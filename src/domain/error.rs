use thiserror::Error;

use super::notification;

/// Reasons a submit is refused before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", notification::MISSING_NAME)]
    MissingName,

    #[error("{}", notification::MISSING_SCHEMA)]
    EmptySchema,
}

/// Failure of the outbound segment request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("endpoint responded with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),
}

/// An edit to the selection list that would break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no schema field selected")]
    Empty,

    #[error("unknown schema field: {0}")]
    UnknownField(String),

    #[error("schema field already selected: {0}")]
    Duplicate(String),

    #[error("no selection at index {0}")]
    IndexOutOfRange(usize),
}
