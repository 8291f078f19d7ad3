//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// Only the data-source and bulk-action layers produce these. The selection
/// and pagination state machine itself never fails.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Entity not found by key
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A bulk action was invoked with an empty selection
    #[error("No entities selected")]
    NoSelection,

    /// Operation not supported by this entity source
    #[error("Operation not supported: {0}")]
    Unsupported(String),

    /// Error reported by the backing entity source
    #[error("Source error: {source_name} - {message}")]
    SourceError {
        source_name: String,
        message: String,
    },

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, entity does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::EntityNotFound(_)
            | Self::ValidationError(_)
            | Self::NoSelection
            | Self::Unsupported(_) => true,
            Self::SourceError { .. } | Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_expected() {
        assert!(CoreError::NoSelection.is_expected());
        assert!(CoreError::EntityNotFound("web01.example.test".into()).is_expected());
        assert!(!CoreError::StorageError("disk full".into()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::EntityNotFound("allow_all".into()))
            .unwrap_or_default();
        assert_eq!(json["code"], "EntityNotFound");
        assert_eq!(json["details"], "allow_all");
    }
}
