use std::fmt;

/// Result type for linkhub-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Theme id is not one of the known themes
    UnknownTheme(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTheme(id) => write!(f, "Unknown theme: {}", id),
        }
    }
}

impl std::error::Error for Error {}
