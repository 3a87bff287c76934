//! Error types for typemark

use thiserror::Error;

/// Typemark errors
///
/// Every variant is a programmer error: it is returned at the call site of
/// the offending operation and is never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypemarkError {
    // Factory input errors (strict mode only)
    #[error("Must specify at least one type")]
    EmptyInput,

    #[error("{input} is of an invalid type, expected string")]
    InvalidLabelType { input: String },

    #[error("{label} has already been defined as an action type")]
    DuplicateLabel { label: String },

    // Table access errors
    #[error("{key} is an invalid action type")]
    UnknownLabel { key: String },

    #[error("Failed setting {key}, object is frozen")]
    FrozenWrite { key: String },
}

impl TypemarkError {
    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            TypemarkError::EmptyInput => "EmptyInput",
            TypemarkError::InvalidLabelType { .. } => "InvalidLabelType",
            TypemarkError::DuplicateLabel { .. } => "DuplicateLabel",
            TypemarkError::UnknownLabel { .. } => "UnknownLabel",
            TypemarkError::FrozenWrite { .. } => "FrozenWrite",
        }
    }

    /// Was this raised while validating factory input?
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TypemarkError::EmptyInput
                | TypemarkError::InvalidLabelType { .. }
                | TypemarkError::DuplicateLabel { .. }
        )
    }
}

/// Result type for typemark operations
pub type TypemarkResult<T> = Result<T, TypemarkError>;
