//! Toggle endpoint contract

use async_trait::async_trait;
use likes_core::{DomainError, MessageId, ToggleOutcome};
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

/// Anything that can flip the like on a message
///
/// Implementations send exactly one request per call and return whatever the
/// backend answered; interpreting the answer is left to [`ToggleResponse::outcome`].
#[async_trait]
pub trait ToggleLikeApi: Send + Sync {
    async fn toggle_like(&self, message_id: &MessageId) -> ClientResult<ToggleResponse>;
}

/// JSON body of a toggle endpoint response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleLikeBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Status and decoded body of a toggle endpoint response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResponse {
    pub status: u16,
    pub body: Option<ToggleLikeBody>,
    /// The body was present but not a JSON object with a string `message`
    pub malformed: bool,
}

impl ToggleResponse {
    /// Response carrying a decoded body
    pub fn new(status: u16, message: Option<&str>) -> Self {
        Self {
            status,
            body: Some(ToggleLikeBody {
                message: message.map(str::to_string),
            }),
            malformed: false,
        }
    }

    /// Decode a raw response body
    ///
    /// An empty body is not malformed; it simply carries no message.
    pub fn from_bytes(status: u16, bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Self {
                status,
                body: None,
                malformed: false,
            };
        }

        match serde_json::from_slice::<serde_json::Value>(bytes) {
            Ok(value @ serde_json::Value::Object(_)) => {
                match serde_json::from_value::<ToggleLikeBody>(value) {
                    Ok(body) => Self {
                        status,
                        body: Some(body),
                        malformed: false,
                    },
                    Err(_) => Self::malformed(status),
                }
            }
            _ => Self::malformed(status),
        }
    }

    fn malformed(status: u16) -> Self {
        Self {
            status,
            body: None,
            malformed: true,
        }
    }

    /// The `message` field of the body, if any
    pub fn message(&self) -> Option<&str> {
        self.body.as_ref().and_then(|b| b.message.as_deref())
    }

    /// What this response means for the icon
    pub fn outcome(&self) -> Result<ToggleOutcome, DomainError> {
        ToggleOutcome::classify(self.status, self.message(), self.malformed)
    }
}
