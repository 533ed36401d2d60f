//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Row-level defects (bad dates, non-numeric amounts) are deliberately not
/// represented here: a single corrupt line must not fail an entire report.
/// Those are tracked as drop counters by the normalizer instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Neither the remote source nor the local fallback file could be read.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// The source bytes could not be decoded as tabular data with the
    /// required header columns.
    #[error("Malformed source: {0}")]
    MalformedSource(String),

    /// A reconfiguration request was rejected; the previous configuration
    /// remains active.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A request carried an unusable parameter.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::SourceUnavailable(_) => 503,
            Self::MalformedSource(_) => 502,
            Self::InvalidConfiguration(_) | Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SourceUnavailable(_) => "SOURCE_UNAVAILABLE",
            Self::MalformedSource(_) => "MALFORMED_SOURCE",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::SourceUnavailable(String::new()).status_code(),
            503
        );
        assert_eq!(AppError::MalformedSource(String::new()).status_code(), 502);
        assert_eq!(
            AppError::InvalidConfiguration(String::new()).status_code(),
            400
        );
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::SourceUnavailable(String::new()).error_code(),
            "SOURCE_UNAVAILABLE"
        );
        assert_eq!(
            AppError::MalformedSource(String::new()).error_code(),
            "MALFORMED_SOURCE"
        );
        assert_eq!(
            AppError::InvalidConfiguration(String::new()).error_code(),
            "INVALID_CONFIGURATION"
        );
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::SourceUnavailable("no source".into()).to_string(),
            "Source unavailable: no source"
        );
        assert_eq!(
            AppError::MalformedSource("missing column".into()).to_string(),
            "Malformed source: missing column"
        );
        assert_eq!(
            AppError::InvalidConfiguration("bad url".into()).to_string(),
            "Invalid configuration: bad url"
        );
        assert_eq!(
            AppError::Internal("oops".into()).to_string(),
            "Internal error: oops"
        );
    }
}
