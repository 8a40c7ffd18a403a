use core::result::Result as CoreResult;
use std::io::Error as IoError;

use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for restdeck operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors that can occur when talking to the remote collection API or
/// loading local configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// An HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] SerdeJsonError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlError),

    /// The remote API answered with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, if any was readable.
        message: String,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record failed local validation before or after a remote call.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl Error {
    /// Determines whether this error may succeed if retried.
    ///
    /// Returns `true` for transient errors like network failures or
    /// server-side (5xx) API errors.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value as JsonValue, from_str};
    use std::io;

    #[test]
    fn test_error_display() {
        let error1 = Error::Config("missing base_url".to_owned());
        assert_eq!(error1.to_string(), "Configuration error: missing base_url");

        let error2 = Error::Api {
            status: 503,
            message: "unavailable".to_owned(),
        };
        assert_eq!(
            error2.to_string(),
            "API request failed with status 503: unavailable"
        );

        let error3 = Error::Validation("name must not be empty".to_owned());
        assert_eq!(error3.to_string(), "Validation failed: name must not be empty");
    }

    #[test]
    fn test_error_is_transient() {
        // Transient errors
        let error1 = Error::Api {
            status: 500,
            message: "boom".to_owned(),
        };
        assert!(error1.is_transient());

        // Non-transient errors
        let error2 = Error::Api {
            status: 404,
            message: "not found".to_owned(),
        };
        assert!(!error2.is_transient());

        let error3 = Error::Config("bad config".to_owned());
        assert!(!error3.is_transient());

        let error4 = Error::Validation("empty field".to_owned());
        assert!(!error4.is_transient());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = from_str::<JsonValue>("invalid json").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
