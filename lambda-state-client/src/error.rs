//! Error types for the status transports

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while fetching a function's status
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The AWS SDK call failed
    #[error("Lambda request failed: {0}")]
    SdkError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Function not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The response carried no configuration payload
    #[error("Unable to retrieve lambda function state")]
    MissingConfiguration {
        /// Identifier the fetch was issued for
        identifier: String,
    },

    /// Construction options were rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_message() {
        let err = ClientError::MissingConfiguration {
            identifier: "myFunc".to_string(),
        };
        assert_eq!(err.to_string(), "Unable to retrieve lambda function state");
    }

    #[test]
    fn test_status_classification() {
        assert!(ClientError::api_error(404, "gone").is_not_found());
        assert!(ClientError::api_error(403, "denied").is_client_error());
        assert!(ClientError::api_error(503, "busy").is_server_error());
        assert!(!ClientError::NotFound("myFunc".into()).is_client_error());
    }
}
