//! Class list - the set of presentation class tokens on a rendered element

use std::fmt;

/// Ordered set of class tokens
///
/// Mirrors the semantics of an element's class attribute: tokens are unique,
/// insertion order is kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Create an empty class list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace separated class attribute
    pub fn parse(attr: &str) -> Self {
        let mut list = Self::new();
        for token in attr.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Check whether a class token is present
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Add a class token; returns false if it was already present
    pub fn add(&mut self, class: &str) -> bool {
        if class.is_empty() || self.contains(class) {
            return false;
        }
        self.0.push(class.to_string());
        true
    }

    /// Remove a class token; returns false if it was absent
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != class);
        self.0.len() != before
    }

    /// Toggle a class token; returns whether it is present afterwards
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.remove(class) {
            false
        } else {
            self.add(class)
        }
    }

    /// Iterate over the tokens in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for class in iter {
            list.add(class);
        }
        list
    }
}

/// A single class token: non-empty and free of whitespace
pub fn is_class_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}
