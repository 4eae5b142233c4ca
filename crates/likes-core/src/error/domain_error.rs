//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::MessageIdParseError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid message id: {0}")]
    InvalidMessageId(#[from] MessageIdParseError),

    #[error("Invalid icon style: {0}")]
    InvalidIconStyle(String),

    #[error("Invalid icon markup: {0}")]
    InvalidIconMarkup(String),

    #[error("Icon has an ambiguous like state (outline: {outline}, filled: {filled})")]
    AmbiguousIconState { outline: bool, filled: bool },

    // =========================================================================
    // Toggle Endpoint Errors
    // =========================================================================
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed toggle response body")]
    MalformedResponse,
}

impl DomainError {
    /// Get an error code string for logs and reports
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidMessageId(_) => "INVALID_MESSAGE_ID",
            Self::InvalidIconStyle(_) => "INVALID_ICON_STYLE",
            Self::InvalidIconMarkup(_) => "INVALID_ICON_MARKUP",
            Self::AmbiguousIconState { .. } => "AMBIGUOUS_ICON_STATE",
            Self::UnexpectedStatus(_) => "UNEXPECTED_STATUS",
            Self::MalformedResponse => "MALFORMED_RESPONSE",
        }
    }

    /// Check if this error came from the toggle endpoint's response
    pub fn is_response_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus(_) | Self::MalformedResponse)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidMessageId(_)
                | Self::InvalidIconStyle(_)
                | Self::InvalidIconMarkup(_)
                | Self::AmbiguousIconState { .. }
        )
    }
}
