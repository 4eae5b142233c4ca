//! # likes-ui
//!
//! The like affordance of a message list: an element tree standing in for the
//! rendered page, the icon markup, the toggle handler, and the delegated click
//! binding whose lifetime is tied to the container it is mounted on.

pub mod binding;
pub mod container;
pub mod error;
pub mod handler;
pub mod markup;

#[cfg(test)]
pub(crate) mod mock;

pub use binding::LikeBinding;
pub use container::{BindingId, Element, ElementId, MessageList, Page};
pub use error::{BindingError, ContainerError, HandlerError};
pub use handler::{LikeToggleHandler, ToggleReport};
pub use likes_common::InFlightPolicy;
pub use markup::IconMarkup;
