//! Client error types.

use quayside_types::SESSION_INVALIDATING_CODES;
use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level failure: a non-2xx status, or no response at all
    /// (`status` is 0).
    #[error("Request failed ({status}): {message}")]
    Transport {
        /// HTTP status code, 0 when no response arrived.
        status: u16,
        /// Message picked from the error body.
        message: String,
    },

    /// The envelope carried a non-success code.
    #[error("Application error ({code}): {message}")]
    Application {
        /// Envelope code.
        code: i64,
        /// Envelope message.
        message: String,
    },

    /// A storage tier could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this failure ended the session.
    pub fn is_session_invalidating(&self) -> bool {
        matches!(self, Error::Application { code, .. } if SESSION_INVALIDATING_CODES.contains(code))
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.is_session_invalidating() || matches!(self, Error::Transport { status: 401, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Transport { status, .. } if *status >= 500)
    }

    /// The user-facing message.
    pub fn message(&self) -> String {
        match self {
            Error::Transport { message, .. } | Error::Application { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

impl From<quayside_config::ConfigError> for Error {
    fn from(err: quayside_config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<quayside_mock::MockError> for Error {
    fn from(err: quayside_mock::MockError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
