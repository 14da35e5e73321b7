//! Affinity profiles: sparse per-tag interest scores for one user session.
//!
//! A tag missing from the profile has affinity `0.0`. Scores only grow:
//! recorded interactions add non-negative deltas and nothing subtracts from
//! stored totals.

use std::{borrow::Borrow, collections::BTreeMap};

use crate::{AffinityError, Tag};

/// A user's accumulated affinity for each tag.
///
/// # Examples
/// ```
/// use eventhub_core::{AffinityProfile, Tag};
///
/// let music = Tag::new("music")?;
/// let profile = AffinityProfile::new().with_affinity(music.clone(), 1.5);
/// assert_eq!(profile.affinity(&music), 1.5);
/// assert_eq!(profile.affinity("sports"), 0.0);
/// # Ok::<(), eventhub_core::TagError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BTreeMap<Tag, f64>", into = "BTreeMap<Tag, f64>")
)]
pub struct AffinityProfile {
    scores: BTreeMap<Tag, f64>,
}

impl AffinityProfile {
    /// Construct an empty profile.
    ///
    /// # Examples
    /// ```
    /// use eventhub_core::AffinityProfile;
    ///
    /// let profile = AffinityProfile::new();
    /// assert!(profile.is_empty());
    /// assert_eq!(profile.affinity("music"), 0.0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the affinity for a tag, or `0.0` when absent.
    #[must_use]
    pub fn affinity<Q>(&self, tag: &Q) -> f64
    where
        Tag: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.scores.get(tag).copied().unwrap_or(0.0)
    }

    /// Return the stored affinity for a tag, if present.
    #[must_use]
    pub fn get<Q>(&self, tag: &Q) -> Option<f64>
    where
        Tag: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.scores.get(tag).copied()
    }

    /// Add a non-negative delta to a tag's affinity.
    ///
    /// Negative or non-finite deltas are ignored so stored scores never
    /// shrink.
    #[expect(
        clippy::float_arithmetic,
        reason = "affinity accumulates by addition"
    )]
    pub fn reinforce(&mut self, tag: Tag, delta: f64) {
        if !delta.is_finite() || delta < 0.0 {
            return;
        }
        *self.scores.entry(tag).or_insert(0.0) += delta;
    }

    /// Set a tag's affinity outright, clamping negatives to `0.0`.
    ///
    /// Intended for building fixtures and restoring displayed state; live
    /// sessions should go through
    /// [`AffinityModel::record`](crate::AffinityModel::record).
    pub fn set_affinity(&mut self, tag: Tag, affinity: f64) {
        let value = if affinity.is_finite() {
            affinity.max(0.0)
        } else {
            0.0
        };
        self.scores.insert(tag, value);
    }

    /// Set a tag's affinity while returning `self` for chaining.
    #[must_use]
    pub fn with_affinity(mut self, tag: Tag, affinity: f64) -> Self {
        self.set_affinity(tag, affinity);
        self
    }

    /// Iterate over stored tags and affinities in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, f64)> {
        self.scores.iter().map(|(tag, &score)| (tag, score))
    }

    /// Number of tags with a stored affinity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether no affinity has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Consume the profile and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<Tag, f64> {
        self.scores
    }
}

impl FromIterator<(Tag, f64)> for AffinityProfile {
    fn from_iter<I: IntoIterator<Item = (Tag, f64)>>(iter: I) -> Self {
        let mut profile = Self::new();
        for (tag, affinity) in iter {
            profile.set_affinity(tag, affinity);
        }
        profile
    }
}

impl TryFrom<BTreeMap<Tag, f64>> for AffinityProfile {
    type Error = AffinityError;

    /// Restore a profile from stored scores.
    ///
    /// Unlike [`FromIterator`], which clamps, this rejects any negative or
    /// non-finite score so corrupt input is reported rather than silently
    /// repaired.
    fn try_from(scores: BTreeMap<Tag, f64>) -> Result<Self, Self::Error> {
        if let Some((tag, &value)) = scores
            .iter()
            .find(|&(_, &value)| !value.is_finite() || value < 0.0)
        {
            return Err(AffinityError::InvalidAffinity {
                tag: tag.clone(),
                value,
            });
        }
        Ok(Self { scores })
    }
}

impl From<AffinityProfile> for BTreeMap<Tag, f64> {
    fn from(profile: AffinityProfile) -> Self {
        profile.into_inner()
    }
}
