use std::fmt;

/// Result type for intend-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Database/index layer error
    Index(intend_index::Error),

    /// Domain validation error
    Types(intend_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// CSV export failed
    Csv(csv::Error),

    /// Configuration error
    Config(String),

    /// Lexicon file could not be parsed
    Lexicon(String),

    /// Session refers to a patient that is not registered
    UnknownPatient(String),

    /// Requested record does not exist
    NotFound(String),

    /// Invalid operation or state
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Index(err) => write!(f, "Index error: {}", err),
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Lexicon(msg) => write!(f, "Lexicon error: {}", msg),
            Error::UnknownPatient(name) => write!(f, "Unknown patient: {}", name),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Index(err) => Some(err),
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Config(_)
            | Error::Lexicon(_)
            | Error::UnknownPatient(_)
            | Error::NotFound(_)
            | Error::InvalidOperation(_) => None,
        }
    }
}

impl From<intend_index::Error> for Error {
    fn from(err: intend_index::Error) -> Self {
        Error::Index(err)
    }
}

impl From<intend_types::Error> for Error {
    fn from(err: intend_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
