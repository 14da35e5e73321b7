//! Tags: opaque category labels shared by items and affinity profiles.
//!
//! The vocabulary is open-ended; the engine only requires that a tag is a
//! non-empty identifier.
//!
//! # Examples
//! ```
//! use eventhub_core::Tag;
//!
//! let tag = Tag::new("music")?;
//! assert_eq!(tag.as_str(), "music");
//! assert_eq!(tag.to_string(), "music");
//! # Ok::<(), eventhub_core::TagError>(())
//! ```

use std::{borrow::Borrow, fmt, str::FromStr};

use thiserror::Error;

/// A category label such as `music` or `outdoors`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Tag(String);

/// Errors returned by [`Tag::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    /// The identifier was empty or whitespace.
    #[error("tag identifier must not be empty")]
    Empty,
}

impl Tag {
    /// Validate and construct a [`Tag`].
    ///
    /// Surrounding whitespace is trimmed; identifiers are otherwise kept as
    /// given.
    ///
    /// # Errors
    /// Returns [`TagError::Empty`] when nothing remains after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, TagError> {
        let raw = id.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TagError::Empty);
        }
        if trimmed.len() == raw.len() {
            Ok(Self(raw))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    /// Return the identifier as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
