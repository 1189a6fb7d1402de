//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the sync client.
///
/// A guarded request that was never attempted is not an error; those
/// come back as `Ok(None)` from the request methods.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not reach the server at all.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("server answered with status {status}")]
    Status {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether retrying the same request later could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_is_retryable() {
        assert!(ClientError::Transport("connection refused".into()).is_retryable());
        assert!(!ClientError::Status { status: 400 }.is_retryable());
    }

    #[test]
    fn error_display() {
        let err = ClientError::Status { status: 500 };
        assert_eq!(err.to_string(), "server answered with status 500");
    }
}
