//! UI layer errors

use likes_client::ClientError;
use likes_core::{DomainError, MessageIdParseError};
use thiserror::Error;

use crate::container::ElementId;

/// Element tree errors
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),
}

/// Mount errors
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("Container #{0} does not exist")]
    ContainerMissing(String),
}

/// Failures of a single click
///
/// 401 responses and the "no message" body are not errors; they are reported
/// as outcomes. Everything here leaves the icon untouched.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Icon has no {attribute} attribute")]
    MissingMessageId { attribute: String },

    #[error("Icon has an invalid message id {value:?}: {source}")]
    InvalidMessageId {
        value: String,
        #[source]
        source: MessageIdParseError,
    },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl HandlerError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingMessageId { .. } => "MISSING_MESSAGE_ID",
            Self::InvalidMessageId { .. } => "INVALID_MESSAGE_ID",
            Self::Client(ClientError::Network(_)) => "NETWORK_ERROR",
            Self::Client(ClientError::InvalidUrl { .. }) => "INVALID_URL",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if a request reached the backend before failing
    pub fn is_response_error(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_response_error(),
            _ => false,
        }
    }
}
