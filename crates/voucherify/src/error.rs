//! Voucherify client errors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a single operation invocation
///
/// This is the return type of every dispatch form.
pub type CallResult<T, E = Error> = Result<T, E>;

/// Voucherify client error
#[derive(Debug, Error)]
pub enum Error {
    /// Network level failure, no HTTP status was received
    #[error("Transport error: {0}")]
    Transport(String),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// A status was received but reading the body failed
    #[error("Could not read response body ({status}): {reason}")]
    Body {
        /// HTTP status code
        status: u16,
        /// Transport message
        reason: String,
    },
    /// Success status but the body does not have the expected shape
    #[error("Could not decode response ({status}): {reason}")]
    Decode {
        /// HTTP status code
        status: u16,
        /// Decoder message
        reason: String,
    },
    /// The API answered with an error status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Decoded error body, if the API sent one
        body: Option<ErrorResponse>,
        /// Human readable message
        message: String,
    },
    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Filter could not be turned into a query string
    #[error("Could not encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// Worker executor failure
    #[error("Worker error: {0}")]
    Worker(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connection, timeout or other network failure
    Transport,
    /// Response body did not decode
    Decode,
    /// Error status from the API
    Api,
    /// Client side problem before anything was sent
    Request,
    /// Worker executor failure
    Worker,
}

impl Error {
    /// HTTP status code, when the failure came with one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Body { status, .. } | Self::Decode { status, .. } | Self::Api { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Decoded API error body
    pub fn body(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Classification of the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::Timeout | Self::Body { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Api { .. } => ErrorKind::Api,
            Self::Config(_) | Self::Serialization(_) | Self::Query(_) | Self::Url(_) => {
                ErrorKind::Request
            }
            Self::Worker(_) => ErrorKind::Worker,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_builder() {
            Error::Config(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            Error::Worker("operation panicked".to_string())
        } else {
            Error::Worker("operation was cancelled".to_string())
        }
    }
}

/// Error body returned by the Voucherify API
///
/// ```json
/// {"code": 404, "key": "not_found", "message": "Resource not found", "details": "Cannot find voucher with id X"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code, mirrors the HTTP status
    pub code: u16,
    /// Machine readable key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Human readable message
    pub message: String,
    /// Additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Request id assigned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code: {}, message: {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ", details: {details}")?;
        }
        Ok(())
    }
}

impl ErrorResponse {
    /// Error response from json
    ///
    /// Fails when the body is not a Voucherify error object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = Error::Api {
            status: 404,
            body: None,
            message: "Resource not found".to_string(),
        };
        assert_eq!(format!("{}", error), "API error (404): Resource not found");
    }

    #[test]
    fn test_transport_error_display() {
        let error = Error::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Transport error: connection refused");
    }

    #[test]
    fn test_decode_error_display() {
        let error = Error::Decode {
            status: 200,
            reason: "expected a sequence".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Could not decode response (200): expected a sequence"
        );
    }

    #[test]
    fn test_status_code() {
        let api = Error::Api {
            status: 400,
            body: None,
            message: String::new(),
        };
        assert_eq!(api.status_code(), Some(400));
        assert_eq!(Error::Timeout.status_code(), None);
        assert_eq!(
            Error::Transport("reset".to_string()).status_code(),
            None
        );

        let body = Error::Body {
            status: 200,
            reason: "connection closed".to_string(),
        };
        assert_eq!(body.status_code(), Some(200));
        assert_eq!(body.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Error::Timeout.kind(), ErrorKind::Transport);
        assert_eq!(
            Error::Config("missing".to_string()).kind(),
            ErrorKind::Request
        );
        assert_eq!(
            Error::Decode {
                status: 200,
                reason: String::new()
            }
            .kind(),
            ErrorKind::Decode
        );
    }

    #[test]
    fn test_error_response_from_json() {
        let json = r#"{
            "code": 404,
            "key": "not_found",
            "message": "Resource not found",
            "details": "Cannot find voucher with id some-code",
            "request_id": "v-0a1b2c"
        }"#;
        let response = ErrorResponse::from_json(json).expect("valid error body");
        assert_eq!(response.code, 404);
        assert_eq!(response.key.as_deref(), Some("not_found"));
        assert_eq!(
            response.to_string(),
            "code: 404, message: Resource not found, details: Cannot find voucher with id some-code"
        );
    }

    #[test]
    fn test_error_response_from_unrelated_json() {
        assert!(ErrorResponse::from_json(r#"{"unexpected": true}"#).is_err());
        assert!(ErrorResponse::from_json("Internal Server Error").is_err());
    }

    #[test]
    fn test_from_serde_json_error() {
        let result: Result<String, _> = serde_json::from_str("not valid json");
        let json_error = result.expect_err("Invalid JSON should produce an error");
        let error: Error = json_error.into();

        match error {
            Error::Serialization(msg) => {
                assert!(msg.to_string().contains("expected"));
            }
            _ => panic!("Expected Error::Serialization"),
        }
    }
}
