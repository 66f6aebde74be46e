use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single `(field, message)` pair describing one constraint violation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Input failed schema validation. Carries every violation found, not just
/// the first.
#[derive(Error, Debug)]
#[error("validation failed on {} field(s)", .details.len())]
pub struct ValidationError {
    pub details: Vec<FieldError>,
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to read or write the snapshot file")]
    Io(#[from] std::io::Error),
    #[error("snapshot file is not valid JSON")]
    Parse(#[from] serde_json::Error),
}
