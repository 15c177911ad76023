//! Workflow definition error types.

use thiserror::Error;

/// Result type for workflow definition operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Errors that can occur while handling workflow definitions.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A step payload was not a JSON object.
    #[error("step payload is not a JSON object")]
    NotAnObject,

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<WorkflowError> for protean_core::Error {
    fn from(err: WorkflowError) -> Self {
        let base = if matches!(err, WorkflowError::Serialization(_)) {
            protean_core::Error::serialization()
        } else {
            protean_core::Error::validation()
        };
        base.with_source(err)
    }
}
