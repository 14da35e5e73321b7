//! Score items for a user's affinity profile.
//!
//! The [`Scorer`] trait turns an [`Item`] and an [`AffinityProfile`] into a
//! [`ScoredItem`]: a relevance value plus the per-tag rows that explain it.
//! Reported numbers are rounded to two decimals; the unrounded values stay
//! available for further arithmetic.

use crate::{AffinityProfile, Item, Tag};

/// Round to two decimal places for display.
///
/// # Examples
/// ```
/// use eventhub_core::round_to_cents;
///
/// assert_eq!(round_to_cents(1.489_6), 1.49);
/// assert_eq!(round_to_cents(0.3), 0.3);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "display rounding scales, rounds, and rescales"
)]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(feature = "serde")]
#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde's serialize_with passes fields by reference"
)]
fn serialize_cents<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to_cents(*value))
}

/// One line of a relevance explanation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContributionRow {
    /// Tag shared by the item and the profile.
    pub tag: Tag,
    /// The user's affinity for the tag.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_cents"))]
    pub affinity: f64,
    /// How strongly the item exhibits the tag.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_cents"))]
    pub item_weight: f64,
    /// `affinity * item_weight`.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_cents"))]
    pub contribution: f64,
}

impl ContributionRow {
    /// Return a copy with every number rounded for display.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            affinity: round_to_cents(self.affinity),
            item_weight: round_to_cents(self.item_weight),
            contribution: round_to_cents(self.contribution),
        }
    }
}

/// An item with its relevance for one profile and the explanation behind it.
///
/// Derived on demand and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    item: Item,
    relevance: f64,
    breakdown: Vec<ContributionRow>,
}

impl ScoredItem {
    /// Assemble a scored item.
    #[must_use]
    pub const fn new(item: Item, relevance: f64, breakdown: Vec<ContributionRow>) -> Self {
        Self {
            item,
            relevance,
            breakdown,
        }
    }

    /// The scored item.
    #[must_use]
    pub const fn item(&self) -> &Item {
        &self.item
    }

    /// Unrounded relevance.
    #[must_use]
    pub const fn relevance(&self) -> f64 {
        self.relevance
    }

    /// Relevance rounded to two decimals, as shown to users.
    #[must_use]
    pub fn reported_relevance(&self) -> f64 {
        round_to_cents(self.relevance)
    }

    /// Rows for tags the user has a positive affinity for.
    #[must_use]
    pub fn breakdown(&self) -> &[ContributionRow] {
        &self.breakdown
    }

    /// Consume the value and return the item.
    #[must_use]
    pub fn into_item(self) -> Item {
        self.item
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScoredItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Report<'a> {
            id: u64,
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            relevance: f64,
            breakdown: &'a [ContributionRow],
        }

        Report {
            id: self.item.id(),
            title: self.item.title(),
            relevance: self.reported_relevance(),
            breakdown: &self.breakdown,
        }
        .serialize(serializer)
    }
}

/// Calculate relevance for an item and explain it.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so ranking over a
/// profile snapshot can run across threads. Scoring is pure: the same item
/// and profile always produce the same result.
///
/// # Examples
///
/// ```rust
/// use eventhub_core::{AffinityProfile, Item, ScoredItem, Scorer};
///
/// struct ZeroScorer;
///
/// impl Scorer for ZeroScorer {
///     fn score(&self, item: &Item, _profile: &AffinityProfile) -> ScoredItem {
///         ScoredItem::new(item.clone(), 0.0, Vec::new())
///     }
/// }
///
/// # fn main() -> Result<(), eventhub_core::ItemError> {
/// let item = Item::from_pairs(1, [("music", 1.0)])?;
/// let scored = ZeroScorer.score(&item, &AffinityProfile::new());
/// assert_eq!(scored.relevance(), 0.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Score `item` according to `profile`.
    fn score(&self, item: &Item, profile: &AffinityProfile) -> ScoredItem;

    /// Score every item in `items`, preserving input order.
    fn score_all(&self, items: &[Item], profile: &AffinityProfile) -> Vec<ScoredItem> {
        items.iter().map(|item| self.score(item, profile)).collect()
    }
}
