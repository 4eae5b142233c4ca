//! Client errors

use likes_common::AppError;
use thiserror::Error;

/// Errors raised while calling the toggle endpoint
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidUrl { .. } => AppError::invalid_input(err),
            ClientError::Network(e) => AppError::network(e),
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
