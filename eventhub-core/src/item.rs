//! Catalogue items: identified events with per-tag weights.
//!
//! Weights must be finite and non-negative; the same rule applies when an
//! item is decoded from JSON.

use std::{borrow::Borrow, collections::BTreeMap};

use log::warn;
use thiserror::Error;

use crate::{Tag, TagError};

/// Per-tag weights describing how strongly an item exhibits each tag.
///
/// Ordered by tag so breakdowns derived from an item are reproducible.
pub type TagWeights = BTreeMap<Tag, f64>;

/// A recommendable item, such as an event in a catalogue.
///
/// Weights are non-negative and finite, typically within `0.0..=1.0`. They
/// are fixed once the item is built.
///
/// # Examples
/// ```
/// use eventhub_core::{Item, Tag, TagWeights};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tags = TagWeights::from([(Tag::new("music")?, 1.0), (Tag::new("outdoors")?, 0.3)]);
/// let item = Item::new(1, tags)?.with_title("Jazz Festival");
///
/// assert_eq!(item.id(), 1);
/// assert_eq!(item.weight("outdoors"), Some(0.3));
/// assert_eq!(item.title(), Some("Jazz Festival"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ItemRecord", into = "ItemRecord")
)]
pub struct Item {
    id: u64,
    title: Option<String>,
    tags: TagWeights,
}

/// Errors returned by [`Item::new`].
#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    /// A weight was negative, NaN, or infinite.
    #[error("weight {weight} for tag '{tag}' must be finite and non-negative")]
    InvalidWeight {
        /// Tag carrying the weight.
        tag: Tag,
        /// Rejected value.
        weight: f64,
    },
    /// A tag identifier could not be parsed.
    #[error(transparent)]
    InvalidTag(#[from] TagError),
}

impl Item {
    /// Validate and construct an [`Item`].
    ///
    /// An empty tag map is allowed; such an item simply scores zero.
    ///
    /// # Errors
    /// Returns [`ItemError::InvalidWeight`] for negative or non-finite
    /// weights.
    pub fn new(id: u64, tags: TagWeights) -> Result<Self, ItemError> {
        for (tag, &weight) in &tags {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ItemError::InvalidWeight {
                    tag: tag.clone(),
                    weight,
                });
            }
            if weight > 1.0 {
                warn!("item {id} weights tag '{tag}' at {weight}, above the usual 0.0..=1.0 range");
            }
        }
        Ok(Self {
            id,
            title: None,
            tags,
        })
    }

    /// Build an item from string/weight pairs.
    ///
    /// # Errors
    /// Returns [`ItemError::InvalidTag`] for blank identifiers and
    /// [`ItemError::InvalidWeight`] for unusable weights.
    pub fn from_pairs<I, S>(id: u64, pairs: I) -> Result<Self, ItemError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let tags = pairs
            .into_iter()
            .map(|(tag, weight)| Tag::new(tag).map(|parsed| (parsed, weight)))
            .collect::<Result<TagWeights, _>>()?;
        Self::new(id, tags)
    }

    /// Attach a display title while returning `self` for chaining.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Unique identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Display title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// All tag weights, ordered by tag.
    #[must_use]
    pub const fn tags(&self) -> &TagWeights {
        &self.tags
    }

    /// Return the weight for a tag, if the item carries it.
    #[must_use]
    pub fn weight<Q>(&self, tag: &Q) -> Option<f64>
    where
        Tag: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tags.get(tag).copied()
    }

    /// Iterate over the item's tags.
    pub fn tag_names(&self) -> impl Iterator<Item = &Tag> {
        self.tags.keys()
    }
}

/// Wire shape used to validate items on deserialisation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ItemRecord {
    id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default)]
    tags: TagWeights,
}

#[cfg(feature = "serde")]
impl TryFrom<ItemRecord> for Item {
    type Error = ItemError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let item = Self::new(record.id, record.tags)?;
        Ok(Self {
            title: record.title,
            ..item
        })
    }
}

#[cfg(feature = "serde")]
impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            tags: item.tags,
        }
    }
}
