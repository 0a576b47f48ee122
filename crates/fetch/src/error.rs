use thiserror::Error;

pub type Result<T> = std::result::Result<T, RemoteSchemaError>;

/// Failure to retrieve a schema from the remote API.
///
/// Recoverable failures (typically a schema that was never deployed) are
/// expected in normal use and can be reported as warnings; anything else
/// should be treated as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteSchemaError {
    message: String,
    recoverable: bool,
    status: Option<u16>,
}

impl RemoteSchemaError {
    #[must_use]
    pub fn new(message: impl Into<String>, recoverable: bool, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            recoverable,
            status,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        self.recoverable
    }

    /// HTTP status of the failed response, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }
}
