use std::fmt;

/// Result type for intend-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A value failed validation (empty name, share out of range, ...)
    InvalidInput(String),

    /// Session identifier could not be parsed
    InvalidSessionId(uuid::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::InvalidSessionId(err) => write!(f, "Invalid session id: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidInput(_) => None,
            Error::InvalidSessionId(err) => Some(err),
        }
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Error::InvalidSessionId(err)
    }
}
