use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

/// Coarse classification of [`ModelError`], handy for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    UnsupportedOperation,
}

/// Errors raised by the model's mutation operations.
///
/// Every error aborts the single call that produced it. Checks run before any state is touched,
/// so the receiver is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A structural precondition on an argument was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The argument is in a state that forbids the operation (e.g. a member that already has an
    /// owner).
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// The receiver never supports the operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ModelError::InvalidState(_) => ErrorKind::InvalidState,
            ModelError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        ModelError::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        ModelError::InvalidState(message.into())
    }

    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        ModelError::UnsupportedOperation(message.into())
    }
}
