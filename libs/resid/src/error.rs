//! Error types for resource identifier parsing.

use thiserror::Error;

/// Reasons a string is not a recognizable resource identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    /// The input is empty (or only a URI prefix).
    #[error("resource identifier cannot be empty")]
    Empty,

    /// The UUID portion could not be parsed.
    #[error("invalid UUID '{input}': {reason}")]
    InvalidUuid { input: String, reason: String },
}

impl ResourceIdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, ResourceIdError::Empty)
    }

    /// Returns true if this error indicates malformed UUID text.
    pub fn is_invalid_uuid(&self) -> bool {
        matches!(self, ResourceIdError::InvalidUuid { .. })
    }
}
