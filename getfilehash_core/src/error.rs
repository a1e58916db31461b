//! Error types for the GetFileHash core library
//!
//! Errors are organized into two categories plus a cancellation marker:
//! - I/O errors: opening and reading the byte source
//! - Validation errors: algorithm labels, configuration, slot transitions
//! - Cancelled: a computation stopped through its cancellation token

use thiserror::Error;

pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the GetFileHash core library
///
/// Every failure inside a hash worker is converted into a terminal
/// [`crate::session::HashEvent`]; nothing propagates across the worker
/// boundary as an unhandled fault.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The computation was cancelled through its token
    #[error("computation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

impl Error {
    /// Whether this error is the cancellation marker rather than a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_file_not_found_error_creation() {
        let path = Path::new("/non/existent/file.bin");
        let error = Error::Io(IoError::file_not_found(path));

        match error {
            Error::Io(io_err) => {
                assert_eq!(io_err.kind, IoErrorKind::FileNotFound);
                assert_eq!(io_err.path, Some(path.to_path_buf()));
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_unsupported_algorithm_error_creation() {
        let error = Error::Validation(ValidationError::unsupported_algorithm("whirlpool"));

        assert!(matches!(
            error,
            Error::Validation(ValidationError::UnsupportedAlgorithm { .. })
        ));
        assert!(error.to_string().contains("whirlpool"));
    }

    #[test]
    fn test_cancelled_is_not_a_failure_category() {
        let error = Error::Cancelled;
        assert!(error.is_cancelled());
        assert!(!Error::Io(IoError::file_not_found(Path::new("x"))).is_cancelled());
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        match error {
            Error::Io(io_err) => {
                assert_eq!(io_err.kind, IoErrorKind::FileNotFound);
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_display() {
        let path = Path::new("/test/file.bin");
        let error = Error::Io(IoError::file_not_found(path));
        let display_string = format!("{error}");

        assert!(display_string.contains("File not found"));
        assert!(display_string.contains("/test/file.bin"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let path = Path::new("/test/file.bin");
        let error = Error::Io(IoError::permission_denied(path, io_error));

        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<()> {
            Err(Error::Validation(ValidationError::unsupported_algorithm(
                "crc64",
            )))
        }

        assert!(returns_error().is_err());
    }

    #[test]
    fn test_file_errors_include_path_context() {
        let path = std::path::PathBuf::from("/downloads/ubuntu-24.04-desktop-amd64.iso");

        let error1 = Error::Io(IoError::file_not_found(&path));
        assert!(error1.to_string().contains("ubuntu-24.04"));

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let error2 = Error::Io(IoError::permission_denied(&path, io_error));
        assert!(error2.to_string().contains("ubuntu-24.04"));
    }
}
