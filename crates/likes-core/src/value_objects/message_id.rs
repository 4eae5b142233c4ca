//! Message ID - opaque token identifying the message behind a like icon
//!
//! The token is set when the icon is rendered and is only ever read by the
//! toggle handler. It may arrive as a string or an integer; either way it is
//! kept verbatim because it is interpolated into a URL path segment.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque message identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Parse from string representation
    ///
    /// Surrounding whitespace is trimmed. Empty tokens and tokens containing
    /// characters that would break out of a single path segment are rejected,
    /// as are the dot segments `.` and `..`, which URL normalization removes.
    pub fn parse(s: &str) -> Result<Self, MessageIdParseError> {
        let token = s.trim();
        if token.is_empty() {
            return Err(MessageIdParseError::Empty);
        }
        if matches!(token, "." | "..") {
            return Err(MessageIdParseError::DotSegment);
        }
        if let Some(c) = token.chars().find(|c| {
            matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
        }) {
            return Err(MessageIdParseError::InvalidCharacter(c));
        }
        Ok(Self(token.to_string()))
    }

    /// Get the token as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the inner token
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a MessageId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MessageIdParseError {
    #[error("message id is empty")]
    Empty,

    #[error("message id contains invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("message id is a dot path segment")]
    DotSegment,
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::str::FromStr for MessageId {
    type Err = MessageIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageId::parse(s)
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for MessageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for MessageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct MessageIdVisitor;

        impl Visitor<'_> for MessageIdVisitor {
            type Value = MessageId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer identifying a message")
            }

            fn visit_i64<E>(self, value: i64) -> Result<MessageId, E>
            where
                E: de::Error,
            {
                Ok(MessageId::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<MessageId, E>
            where
                E: de::Error,
            {
                Ok(MessageId::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<MessageId, E>
            where
                E: de::Error,
            {
                MessageId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(MessageIdVisitor)
    }
}
