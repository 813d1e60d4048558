//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Markup a component needs is not present on the page
    #[error("Missing element: {0}")]
    MissingElement(&'static str),

    /// Contact form submitted with at least one empty field
    #[error("Please fill in all fields")]
    IncompleteForm,

    /// Contact form submitted again before the previous send finished
    #[error("A message is already being sent")]
    SubmissionInFlight,

    /// Configuration value rejected
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::MissingElement(".page-loader");
        assert_eq!(format!("{}", err), "Missing element: .page-loader");
        assert_eq!(
            FolioError::IncompleteForm.to_string(),
            "Please fill in all fields"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
