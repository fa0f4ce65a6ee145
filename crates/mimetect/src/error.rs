//! Error types for mimetect.
//!
//! All fallible operations in the library return [`Result`], whose error type is
//! [`MimetectError`]. The taxonomy mirrors how errors are actually handled:
//!
//! - `Startup` is fatal: a required detection capability is missing at
//!   construction time. There is no point retrying a call on a parser that
//!   could not be built.
//! - `InvalidInput` is a caller bug: the argument handed to
//!   `from_resource_stream` does not behave like an open, readable, seekable
//!   stream.
//! - `Detection` is recoverable by the caller: an unreadable path or content the
//!   backend cannot classify. The message always carries either the backend's
//!   own diagnostic or a stable fallback string, never an empty message.
//! - `Io` wraps `std::io::Error` and always bubbles up unchanged; system errors
//!   must surface to enable bug reports.
//!
//! No error is retried internally: detection is deterministic, so retrying the
//! same input cannot change the outcome. Callers may retry with a different
//! source (e.g. fall back from a stream to a path).
use thiserror::Error;

/// Result type alias using [`MimetectError`].
pub type Result<T> = std::result::Result<T, MimetectError>;

/// Main error type for all mimetect operations.
#[derive(Debug, Error)]
pub enum MimetectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required detection capability was unavailable when constructing a
    /// parser. Non-recoverable.
    #[error("Startup error: {message}")]
    Startup { message: String },

    /// The caller passed something that is not a usable resource stream.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend could not determine a MIME type for the given source.
    #[error("Detection error: {message}")]
    Detection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MimetectError {
    /// Create a Startup error.
    pub fn startup<S: Into<String>>(message: S) -> Self {
        Self::Startup {
            message: message.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
            source: None,
        }
    }

    /// Create an InvalidInput error with source.
    pub fn invalid_input_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidInput {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Detection error.
    pub fn detection<S: Into<String>>(message: S) -> Self {
        Self::Detection {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Detection error with source.
    pub fn detection_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Detection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MimetectError = io_err.into();
        assert!(matches!(err, MimetectError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_startup_error() {
        let err = MimetectError::startup("sniffer unavailable");
        assert_eq!(err.to_string(), "Startup error: sniffer unavailable");
    }

    #[test]
    fn test_invalid_input_error() {
        let err = MimetectError::invalid_input("bad stream");
        assert_eq!(err.to_string(), "Invalid input: bad stream");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_invalid_input_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidInput, "broken handle");
        let err = MimetectError::invalid_input_with_source("bad stream", source);
        assert_eq!(err.to_string(), "Invalid input: bad stream");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_detection_error() {
        let err = MimetectError::detection("unclassifiable content");
        assert_eq!(err.to_string(), "Detection error: unclassifiable content");
    }

    #[test]
    fn test_detection_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = MimetectError::detection_with_source("cannot read", source);
        assert_eq!(err.to_string(), "Detection error: cannot read");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_bubbles_unchanged() {
        fn read_file() -> Result<Vec<u8>> {
            let content = std::fs::read("/nonexistent/file.bin")?;
            Ok(content)
        }

        let result = read_file();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), MimetectError::Io(_)));
    }
}
