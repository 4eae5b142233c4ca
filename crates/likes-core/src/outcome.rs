//! Toggle outcome - what a toggle endpoint response means for the icon

use serde::Serialize;

use crate::error::DomainError;

/// Body message the endpoint sends when the message does not exist
pub const NO_MESSAGE: &str = "There is no message";

/// Result of one click on a like icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The endpoint flipped the like; the icon classes flip too
    Toggled,
    /// The endpoint reported that the message does not exist
    NoMessage,
    /// The endpoint rejected the request with 401
    Unauthorized,
    /// A request for the same message was still pending; no request was sent
    Skipped,
}

impl ToggleOutcome {
    /// Classify an endpoint response
    ///
    /// Checks run in order: the "no message" body wins over any status, a 401
    /// wins over any body, any other non-2xx status is an error, and a 2xx
    /// with a body that is not a JSON object is an error.
    pub fn classify(
        status: u16,
        message: Option<&str>,
        malformed: bool,
    ) -> Result<Self, DomainError> {
        if message == Some(NO_MESSAGE) {
            return Ok(Self::NoMessage);
        }
        if status == 401 {
            return Ok(Self::Unauthorized);
        }
        if !(200..300).contains(&status) {
            return Err(DomainError::UnexpectedStatus(status));
        }
        if malformed {
            return Err(DomainError::MalformedResponse);
        }
        Ok(Self::Toggled)
    }

    /// Whether the icon's classes change
    #[inline]
    pub fn changes_state(self) -> bool {
        matches!(self, Self::Toggled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toggled => "toggled",
            Self::NoMessage => "no_message",
            Self::Unauthorized => "unauthorized",
            Self::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
