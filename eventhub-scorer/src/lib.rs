//! Relevance scoring and ranking for EventHub items.
//!
//! [`WeightedSumScorer`] implements [`Scorer`](eventhub_core::Scorer): an
//! item's relevance is the sum of `affinity * weight` over its tags, and
//! the breakdown lists every tag the user has a positive affinity for.
//! [`Ranker`] orders scored items by their rounded relevance, highest first,
//! with a configurable [`TieBreak`] for equal scores.
//!
//! # Examples
//!
//! ```
//! use eventhub_core::{AffinityProfile, Item, Tag};
//! use eventhub_scorer::rank;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profile: AffinityProfile = [(Tag::new("outdoors")?, 1.0)].into_iter().collect();
//! let items = vec![
//!     Item::from_pairs(1, [("music", 1.0), ("outdoors", 0.3)])?,
//!     Item::from_pairs(2, [("outdoors", 0.9)])?,
//! ];
//!
//! let ranked = rank(&items, &profile);
//! assert_eq!(ranked[0].item().id(), 2);
//! assert_eq!(ranked[0].reported_relevance(), 0.9);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::cmp::Ordering;

use eventhub_core::{AffinityProfile, ContributionRow, Item, ScoredItem, Scorer};
use log::trace;

mod error;
mod types;

pub use error::RankingError;
pub use types::TieBreak;

/// Scores items as the weighted sum of the profile's tag affinities.
///
/// Tags missing from the profile contribute nothing and produce no
/// breakdown row. An item without tags scores `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSumScorer;

impl WeightedSumScorer {
    /// Create a scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Scorer for WeightedSumScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "relevance is a weighted sum of affinities"
    )]
    fn score(&self, item: &Item, profile: &AffinityProfile) -> ScoredItem {
        let mut relevance = 0.0;
        let mut breakdown = Vec::new();
        for (tag, &item_weight) in item.tags() {
            let affinity = profile.affinity(tag);
            let contribution = affinity * item_weight;
            relevance += contribution;
            if affinity > 0.0 {
                breakdown.push(ContributionRow {
                    tag: tag.clone(),
                    affinity,
                    item_weight,
                    contribution,
                });
            }
        }
        trace!(
            "item {} scored {relevance:.4} from {} matching tags",
            item.id(),
            breakdown.len()
        );
        ScoredItem::new(item.clone(), relevance, breakdown)
    }
}

/// Orders items by relevance using a [`Scorer`].
///
/// # Examples
///
/// ```
/// use eventhub_core::{AffinityProfile, Item, Tag};
/// use eventhub_scorer::{Ranker, TieBreak, WeightedSumScorer};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let items = vec![
///     Item::from_pairs(7, [("food", 0.5)])?,
///     Item::from_pairs(3, [("food", 0.5)])?,
/// ];
/// let profile: AffinityProfile = [(Tag::new("food")?, 2.0)].into_iter().collect();
///
/// let by_id = Ranker::new(WeightedSumScorer).rank(&items, &profile);
/// assert_eq!(by_id[0].item().id(), 3);
///
/// let as_given = Ranker::new(WeightedSumScorer)
///     .with_tie_break(TieBreak::InputOrder)
///     .rank(&items, &profile);
/// assert_eq!(as_given[0].item().id(), 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ranker<S = WeightedSumScorer> {
    scorer: S,
    tie_break: TieBreak,
}

impl<S: Scorer> Ranker<S> {
    /// Build a ranker around `scorer` with the default tie-break.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self {
            scorer,
            tie_break: TieBreak::ItemId,
        }
    }

    /// Replace the tie-break applied to equal rounded scores.
    #[must_use]
    pub fn with_tie_break(self, tie_break: TieBreak) -> Self {
        Self { tie_break, ..self }
    }

    /// Configured tie-break.
    #[must_use]
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Score and order `items` for `profile`.
    ///
    /// Neither the items nor the profile are modified.
    #[must_use]
    pub fn rank(&self, items: &[Item], profile: &AffinityProfile) -> Vec<ScoredItem> {
        let mut scored = self.scorer.score_all(items, profile);
        sort_scored(&mut scored, self.tie_break);
        scored
    }
}

/// Score and order `items` with [`WeightedSumScorer`] and the default
/// tie-break.
#[must_use]
pub fn rank(items: &[Item], profile: &AffinityProfile) -> Vec<ScoredItem> {
    Ranker::new(WeightedSumScorer).rank(items, profile)
}

/// Sort already-scored items in place.
///
/// Items compare by relevance rounded to two decimals, so values that
/// display identically are treated as ties. The sort is stable.
pub fn sort_scored(scored: &mut [ScoredItem], tie_break: TieBreak) {
    scored.sort_by(|a, b| compare(a, b, tie_break));
}

fn compare(a: &ScoredItem, b: &ScoredItem, tie_break: TieBreak) -> Ordering {
    let by_score = b.reported_relevance().total_cmp(&a.reported_relevance());
    match tie_break {
        TieBreak::ItemId => by_score.then_with(|| a.item().id().cmp(&b.item().id())),
        TieBreak::InputOrder => by_score,
    }
}
