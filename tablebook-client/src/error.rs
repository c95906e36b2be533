//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed at the transport level
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (404), message extracted from the error body
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-success status with a structured error message
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Non-success status whose body carried no usable error message
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Success status but the body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Server-provided message suitable for showing the user verbatim.
    ///
    /// Transport failures, bare statuses, and decode failures yield
    /// `None`; callers substitute their own generic fallback.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } | ClientError::NotFound(message)
                if !message.is_empty() =>
            {
                Some(message)
            }
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_extracts_api_body() {
        let err = ClientError::Api {
            status: 500,
            message: "Cannot cancel within 2 hours".to_string(),
        };
        assert_eq!(err.server_message(), Some("Cannot cancel within 2 hours"));
    }

    #[test]
    fn server_message_extracts_not_found_body() {
        let err = ClientError::NotFound("Unauthorized".to_string());
        assert_eq!(err.server_message(), Some("Unauthorized"));
    }

    #[test]
    fn server_message_ignores_empty_and_bare_statuses() {
        assert_eq!(ClientError::NotFound(String::new()).server_message(), None);
        assert_eq!(ClientError::Status(502).server_message(), None);
        assert_eq!(
            ClientError::InvalidResponse("truncated".to_string()).server_message(),
            None
        );
    }
}
