//! # likes-core
//!
//! Domain layer for the message like toggle: message identifiers, the explicit
//! like state, the presentation classes that render it, and the classification
//! of toggle endpoint responses.
//! This crate has zero dependencies on infrastructure (HTTP client, UI binding, etc.).

pub mod entities;
pub mod error;
pub mod outcome;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{is_class_token, ClassList, IconStyle, LikeState};
pub use error::DomainError;
pub use outcome::{ToggleOutcome, NO_MESSAGE};
pub use value_objects::{MessageId, MessageIdParseError};
