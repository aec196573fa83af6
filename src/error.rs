use thiserror::Error;

/// Errors that can occur while building or touching immutable documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HyperJsonError {
    /// A mutating operation was attempted on a frozen container.
    #[error("attempted to mutate an immutable {target} with {operation}()")]
    MutationRejected {
        target: &'static str,
        operation: &'static str,
    },
    #[error("failed to parse document: {0}")]
    Parse(String),
    #[error("failed to read document: {0}")]
    Io(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for HyperJsonError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            HyperJsonError::Io(err.to_string())
        } else {
            HyperJsonError::Parse(err.to_string())
        }
    }
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, HyperJsonError>;
