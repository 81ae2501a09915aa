//! Error types for dataprove
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::domain::ValidationError;

/// Result type alias for dataprove operations
pub type Result<T> = std::result::Result<T, DataproveError>;

/// Main error type for all dataprove operations
#[derive(Debug, Error)]
pub enum DataproveError {
    /// A required form field was missing; the action had no effect and can be retried
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A project id that is not part of the dashboard
    #[error("Unknown project: {0}")]
    UnknownProject(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl DataproveError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            DataproveError::Validation(_) => "VALIDATION",
            DataproveError::ConfigError(_) => "CONFIG_ERROR",
            DataproveError::InvalidJson(_) => "INVALID_JSON",
            DataproveError::FileNotFound(_) => "FILE_NOT_FOUND",
            DataproveError::UnknownProject(_) => "UNKNOWN_PROJECT",
            DataproveError::Io(_) => "IO_ERROR",
            DataproveError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Whether the error is a blocking validation message rather than a failure
    pub fn is_validation(&self) -> bool {
        matches!(self, DataproveError::Validation(_))
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        DataproveError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &DataproveError) -> i32 {
    match error {
        DataproveError::Validation(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let validation = ValidationError::new("Please enter your email address", vec!["email"]);
        assert_eq!(DataproveError::from(validation).code(), "VALIDATION");
        assert_eq!(DataproveError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(DataproveError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(DataproveError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(DataproveError::UnknownProject("test".into()).code(), "UNKNOWN_PROJECT");
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        let err: DataproveError =
            ValidationError::new("Please enter your password", vec!["password"]).into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please enter your password");
    }

    #[test]
    fn test_exit_codes() {
        let validation = ValidationError::new("missing", vec!["email"]);
        assert_eq!(to_exit_code(&DataproveError::from(validation)), 2);
        assert_eq!(to_exit_code(&DataproveError::ConfigError("test".into())), 1);
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = DataproveError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }
}
