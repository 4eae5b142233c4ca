//! Domain entities

mod class_list;
mod like;

pub use class_list::{is_class_token, ClassList};
pub use like::{IconStyle, LikeState};
