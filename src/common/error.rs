//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Backend Errors
    // ─────────────────────────────────────────────────────────────
    #[error("GEMINI_API_KEY is not set")]
    ApiKeyMissing,

    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error("Invalid course payload: {message}")]
    InvalidCourse { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn invalid_course(message: impl Into<String>) -> Self {
        Self::InvalidCourse {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (the UI stays usable and the
    /// user can retry immediately)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Backend { .. }
                | Error::InvalidCourse { .. }
                | Error::Http(_)
                | Error::Json(_)
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should abort startup
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ApiKeyMissing | Error::Terminal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::backend("no candidates returned");
        assert_eq!(err.to_string(), "Backend error: no candidates returned");

        let err = Error::ApiKeyMissing;
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::backend("timeout").is_recoverable());
        assert!(Error::invalid_course("2 cards").is_recoverable());
        assert!(!Error::ApiKeyMissing.is_recoverable());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::ApiKeyMissing.is_fatal());
        assert!(!Error::backend("transient").is_fatal());
    }
}
