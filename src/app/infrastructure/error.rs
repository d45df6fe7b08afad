use thiserror::Error;

use crate::app::services::format::FormatError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown image format: {0}")]
    UnknownImageFormat(String),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("read-only"));
    }

    #[test]
    fn test_format_error_conversion() {
        let err = FormatError::new("Unterminated string literal", 2, 7);
        let app_err: AppError = err.clone().into();
        assert!(matches!(app_err, AppError::Format(ref e) if *e == err));
        assert_eq!(
            app_err.to_string(),
            "Format error: Unterminated string literal (2:7)"
        );
    }

    #[test]
    fn test_error_display() {
        let err = AppError::UnknownLanguage("cobol".to_string());
        assert_eq!(err.to_string(), "Unknown language: cobol");

        let err = AppError::UnknownTheme("solarized".to_string());
        assert_eq!(err.to_string(), "Unknown theme: solarized");

        let err = AppError::Capture("no preview mounted".to_string());
        assert_eq!(err.to_string(), "Capture error: no preview mounted");

        let err = AppError::ClipboardUnavailable("permission denied".to_string());
        assert_eq!(err.to_string(), "Clipboard unavailable: permission denied");
    }
}
