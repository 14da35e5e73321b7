//! Core domain types for the EventHub affinity engine.
//!
//! A user's [`AffinityProfile`] records how strongly their behaviour points
//! at each [`Tag`]. The [`AffinityModel`] seeds profiles from declared
//! interests and folds [`Interaction`]s into them with time decay; the
//! [`Scorer`] trait turns a profile and an [`Item`] into an explained
//! relevance score.
//!
//! Constructors return `Result` to surface invalid input early. Empty input
//! (an interaction without tags, an item without tags) is not an error and
//! yields a no-op or a zero score.
//!
//! # Examples
//!
//! ```
//! use eventhub_core::{
//!     AffinityModel, DecayRate, FixedClock, Interaction, InteractionKind, Tag, Timestamp,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let now = Timestamp::parse("2025-04-15")?;
//! let model = AffinityModel::new(DecayRate::default(), FixedClock::new(now));
//! let mut profile = model.seed([Tag::new("outdoors")?]);
//!
//! let saved = Interaction::from_names(["food", "outdoors"], InteractionKind::Save, now)?;
//! let _outcome = model.record(&mut profile, &saved);
//!
//! assert_eq!(profile.affinity("outdoors"), 3.0);
//! assert_eq!(profile.affinity("food"), 2.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod decay;
mod error;
mod interaction;
mod item;
mod model;
mod profile;
mod scorer;
mod shared;
mod tag;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod time;

pub use decay::{DEFAULT_DECAY_RATE, DecayRate, decay_factor, interaction_weight};
pub use error::AffinityError;
pub use interaction::{Interaction, InteractionKind};
pub use item::{Item, ItemError, TagWeights};
pub use model::{AffinityModel, RecordOutcome, interaction_delta, record_interaction};
pub use profile::AffinityProfile;
pub use scorer::{ContributionRow, ScoredItem, Scorer, round_to_cents};
pub use shared::SharedProfile;
pub use tag::{Tag, TagError};
pub use time::{Clock, FixedClock, SystemClock, Timestamp, TimestampError};
