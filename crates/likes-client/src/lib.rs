//! # likes-client
//!
//! Client for the per-message toggle endpoint: path building, the
//! [`ToggleLikeApi`] seam, and its reqwest implementation.

pub mod api;
pub mod endpoint;
pub mod error;
pub mod http;

pub use api::{ToggleLikeApi, ToggleLikeBody, ToggleResponse};
pub use endpoint::{toggle_like_path, toggle_like_url};
pub use error::{ClientError, ClientResult};
pub use http::HttpToggleLikeApi;
