//! Facade crate for the EventHub affinity engine.
//!
//! This crate re-exports the core domain types and, behind the `scorer`
//! feature, the weighted-sum scorer and ranking helpers.

#![forbid(unsafe_code)]

pub use eventhub_core::{
    AffinityError, AffinityModel, AffinityProfile, Clock, ContributionRow, DEFAULT_DECAY_RATE,
    DecayRate, FixedClock, Interaction, InteractionKind, Item, ItemError, RecordOutcome,
    ScoredItem, Scorer, SharedProfile, SystemClock, Tag, TagError, TagWeights, Timestamp,
    TimestampError, decay_factor, interaction_delta, interaction_weight, record_interaction,
    round_to_cents,
};

#[cfg(feature = "scorer")]
pub use eventhub_scorer::{Ranker, RankingError, TieBreak, WeightedSumScorer, rank, sort_scored};
