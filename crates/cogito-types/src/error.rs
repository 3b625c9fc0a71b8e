use std::fmt;

/// Result type for cogito operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a collection
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Resource unreachable or not parseable as JSON
    Load(String),

    /// Resource parsed but does not have the expected shape
    Shape(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Load(msg) => write!(f, "Load error: {}", msg),
            Error::Shape(msg) => write!(f, "Shape error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Load(_) | Error::Shape(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
