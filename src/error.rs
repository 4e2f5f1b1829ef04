//! Error types for projection inputs

use thiserror::Error;

/// Errors raised by the projection functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// An input was out of range or not a finite number
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the offending input field
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },
}

impl ProjectionError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field that caused the error
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
