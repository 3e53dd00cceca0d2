/// Error types for the scour library
use std::fmt;

/// Result type alias for scour operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Main error type for scour operations
///
/// The core algorithms are total over well-formed input, so the error
/// surface is small: pattern validation plus the I/O boundary used by
/// the CLI front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Pattern-related errors
    InvalidPattern(String),

    /// I/O errors
    Io(String),

    /// General errors
    Other(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
            ScanError::Io(msg) => write!(f, "I/O error: {}", msg),
            ScanError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err.to_string())
    }
}

impl From<String> for ScanError {
    fn from(msg: String) -> Self {
        ScanError::Other(msg)
    }
}

impl From<&str> for ScanError {
    fn from(msg: &str) -> Self {
        ScanError::Other(msg.to_string())
    }
}
