//! Like state and the presentation classes that render it

use serde::{Deserialize, Serialize};

use super::{is_class_token, ClassList};
use crate::error::DomainError;

/// Whether the current user likes a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeState {
    #[default]
    NotLiked,
    Liked,
}

impl LikeState {
    /// The state a successful toggle moves to
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::NotLiked => Self::Liked,
            Self::Liked => Self::NotLiked,
        }
    }

    #[inline]
    pub fn is_liked(self) -> bool {
        matches!(self, Self::Liked)
    }
}

impl From<bool> for LikeState {
    fn from(liked: bool) -> Self {
        if liked {
            Self::Liked
        } else {
            Self::NotLiked
        }
    }
}

/// The two mutually exclusive presentation classes of a like icon
///
/// `outline` renders [`LikeState::NotLiked`], `filled` renders [`LikeState::Liked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconStyle {
    outline: String,
    filled: String,
}

impl IconStyle {
    /// Font Awesome "regular" style
    pub const DEFAULT_OUTLINE: &'static str = "far";
    /// Font Awesome "solid" style
    pub const DEFAULT_FILLED: &'static str = "fas";

    /// Create a style from two distinct, non-empty class tokens
    pub fn new(outline: impl Into<String>, filled: impl Into<String>) -> Result<Self, DomainError> {
        let outline = outline.into();
        let filled = filled.into();

        if !is_class_token(&outline) || !is_class_token(&filled) {
            return Err(DomainError::InvalidIconStyle(format!(
                "style classes must be single non-empty tokens, got {outline:?} and {filled:?}"
            )));
        }
        if outline == filled {
            return Err(DomainError::InvalidIconStyle(format!(
                "outline and filled classes are both {outline:?}"
            )));
        }

        Ok(Self { outline, filled })
    }

    pub fn outline(&self) -> &str {
        &self.outline
    }

    pub fn filled(&self) -> &str {
        &self.filled
    }

    /// Class that renders the given state
    pub fn class_for(&self, state: LikeState) -> &str {
        match state {
            LikeState::NotLiked => &self.outline,
            LikeState::Liked => &self.filled,
        }
    }

    /// Read the state back from an element's classes
    ///
    /// Fails when neither or both style classes are present.
    pub fn state_of(&self, classes: &ClassList) -> Result<LikeState, DomainError> {
        match (classes.contains(&self.outline), classes.contains(&self.filled)) {
            (true, false) => Ok(LikeState::NotLiked),
            (false, true) => Ok(LikeState::Liked),
            (outline, filled) => Err(DomainError::AmbiguousIconState { outline, filled }),
        }
    }

    /// Render a state onto a class list, replacing whichever style class was there
    pub fn apply(&self, classes: &mut ClassList, state: LikeState) {
        classes.remove(self.class_for(state.toggled()));
        classes.add(self.class_for(state));
    }

    /// Toggle both style classes
    ///
    /// Preserves the "exactly one style class" invariant when it already
    /// holds; it does not repair a list that violates it.
    pub fn flip(&self, classes: &mut ClassList) {
        classes.toggle(&self.outline);
        classes.toggle(&self.filled);
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            outline: Self::DEFAULT_OUTLINE.to_string(),
            filled: Self::DEFAULT_FILLED.to_string(),
        }
    }
}
