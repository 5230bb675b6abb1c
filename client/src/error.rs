//! Error types for the todo client

use thiserror::Error;

/// Errors that can occur when talking to the todo service
///
/// `Display` renders the text a user interface shows verbatim.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Error: {0}")]
    Request(String),

    /// The service answered with a non-2xx status
    #[error("Error Code: {status}\nMessage: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The envelope's `message`, or the raw body if it was not an envelope
        message: String,
    },

    /// A 2xx response body did not decode
    #[error("Error: invalid response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Status code of an API error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the service reported the item as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_matches_ui_format() {
        let err = ClientError::Api {
            status: 400,
            message: "Title is required".to_string(),
        };
        assert_eq!(err.to_string(), "Error Code: 400\nMessage: Title is required");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_not_found());
    }

    #[test]
    fn request_error_display() {
        let err = ClientError::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "Error: connection refused");
        assert_eq!(err.status(), None);
    }
}
