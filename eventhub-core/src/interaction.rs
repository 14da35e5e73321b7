//! Interactions: ephemeral user actions that reinforce tag affinity.
//!
//! Kinds are ordered by how strongly they signal interest:
//! `view` and `like` < `save` < `review`.
//!
//! # Examples
//! ```
//! use eventhub_core::InteractionKind;
//!
//! assert_eq!(InteractionKind::Review.as_str(), "review");
//! assert_eq!("SAVE".parse::<InteractionKind>(), Ok(InteractionKind::Save));
//! ```

use std::{collections::BTreeSet, convert::Infallible, fmt, str::FromStr};

use crate::{Tag, TagError, Timestamp};

/// The kind of action a user performed on an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum InteractionKind {
    /// The user opened the item.
    View,
    /// The user liked the item. Also used when seeding declared interests.
    Like,
    /// The user saved the item for later.
    Save,
    /// The user wrote a review.
    Review,
    /// A kind the engine does not recognise; weighted like a view.
    Other(String),
}

impl InteractionKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::View => "view",
            Self::Like => "like",
            Self::Save => "save",
            Self::Review => "review",
            Self::Other(name) => name,
        }
    }

    /// Report whether the kind is one of the recognised variants.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_lowercase().as_str() {
            "view" => Self::View,
            "like" => Self::Like,
            "save" => Self::Save,
            "review" => Self::Review,
            _ => Self::Other(s.trim().to_owned()),
        };
        Ok(kind)
    }
}

impl From<String> for InteractionKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<InteractionKind> for String {
    fn from(kind: InteractionKind) -> Self {
        kind.as_str().to_owned()
    }
}

/// A single observed action: which tags it touched, what kind it was, and
/// when it happened.
///
/// Tags are held as a set; repeating a tag in the input does not count it
/// twice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    /// Tags of the item acted upon.
    pub tags: BTreeSet<Tag>,
    /// What the user did.
    pub kind: InteractionKind,
    /// When the user did it.
    pub occurred_at: Timestamp,
}

impl Interaction {
    /// Construct an interaction from already-validated parts.
    pub fn new<I>(tags: I, kind: InteractionKind, occurred_at: Timestamp) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        Self {
            tags: tags.into_iter().collect(),
            kind,
            occurred_at,
        }
    }

    /// Parse tag identifiers and build an interaction.
    ///
    /// # Errors
    /// Returns [`TagError`] when any identifier is blank.
    pub fn from_names<I, S>(
        names: I,
        kind: InteractionKind,
        occurred_at: Timestamp,
    ) -> Result<Self, TagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = names
            .into_iter()
            .map(Tag::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self {
            tags,
            kind,
            occurred_at,
        })
    }
}
