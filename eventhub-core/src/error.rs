//! Errors raised by the affinity model.

use thiserror::Error;

use crate::{Tag, TagError, TimestampError};

/// Input-validation failures surfaced by affinity operations.
///
/// Empty interactions are not errors; see
/// [`RecordOutcome::NoTags`](crate::RecordOutcome::NoTags).
#[derive(Debug, Error, PartialEq)]
pub enum AffinityError {
    /// The decay rate was zero, negative, or not finite.
    #[error("decay rate {lambda} must be finite and greater than zero")]
    InvalidDecayRate {
        /// Rejected rate.
        lambda: f64,
    },
    /// An interaction timestamp was unusable.
    #[error(transparent)]
    InvalidTimestamp(#[from] TimestampError),
    /// An interaction referenced a blank tag.
    #[error(transparent)]
    InvalidTag(#[from] TagError),
    /// A stored affinity was negative or not finite.
    #[error("affinity {value} for tag '{tag}' must be finite and non-negative")]
    InvalidAffinity {
        /// Tag carrying the rejected score.
        tag: Tag,
        /// Rejected score.
        value: f64,
    },
    /// A writer panicked while holding the shared profile lock.
    #[error("shared affinity profile is unavailable after a panicked update")]
    ProfileUnavailable,
}
