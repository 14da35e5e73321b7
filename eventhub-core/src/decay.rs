//! Numeric helpers shared by the affinity model: time decay and the
//! interaction weight table.
//!
//! Decay is `exp(-lambda * age_days)` where `age_days` counts whole days
//! elapsed (partial days are dropped, future instants count as zero). The
//! default `lambda = 0.05` halves a contribution roughly every 14 days.

use log::warn;

use crate::{AffinityError, InteractionKind, Timestamp};

/// Decay rate applied when none is configured.
pub const DEFAULT_DECAY_RATE: f64 = 0.05;

/// Weight of a `review` interaction.
pub const REVIEW_WEIGHT: f64 = 3.0;
/// Weight of a `save` interaction.
pub const SAVE_WEIGHT: f64 = 2.0;
/// Weight of `view`, `like`, and unrecognised interactions.
pub const BASE_WEIGHT: f64 = 1.0;

/// Validated exponential decay rate (`lambda`, per day).
///
/// # Examples
/// ```
/// use eventhub_core::DecayRate;
///
/// let rate = DecayRate::new(0.1)?;
/// assert_eq!(rate.get(), 0.1);
/// assert!(DecayRate::new(0.0).is_err());
/// assert_eq!(DecayRate::default().get(), 0.05);
/// # Ok::<(), eventhub_core::AffinityError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayRate(f64);

impl DecayRate {
    /// Validate a decay rate.
    ///
    /// # Errors
    /// Returns [`AffinityError::InvalidDecayRate`] unless `lambda` is finite
    /// and strictly positive.
    pub fn new(lambda: f64) -> Result<Self, AffinityError> {
        if lambda.is_finite() && lambda > 0.0 {
            Ok(Self(lambda))
        } else {
            Err(AffinityError::InvalidDecayRate { lambda })
        }
    }

    /// Return the raw rate.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Days for a contribution to lose half its weight.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "half-life is ln(2) divided by the rate"
    )]
    pub fn half_life_days(self) -> f64 {
        std::f64::consts::LN_2 / self.0
    }
}

impl Default for DecayRate {
    fn default() -> Self {
        Self(DEFAULT_DECAY_RATE)
    }
}

/// Whole days from `occurred_at` to `now`, floored and never negative.
///
/// # Examples
/// ```
/// use eventhub_core::{Timestamp, decay::whole_days_elapsed};
///
/// let then = Timestamp::parse("2025-04-01T18:00:00Z")?;
/// let now = Timestamp::parse("2025-04-03T06:00:00Z")?;
/// assert_eq!(whole_days_elapsed(then, now), 1);
/// assert_eq!(whole_days_elapsed(now, then), 0);
/// # Ok::<(), eventhub_core::TimestampError>(())
/// ```
#[must_use]
pub fn whole_days_elapsed(occurred_at: Timestamp, now: Timestamp) -> i64 {
    now.as_datetime()
        .signed_duration_since(occurred_at.as_datetime())
        .num_days()
        .max(0)
}

/// Decay multiplier for a contribution `age_days` old.
///
/// Negative ages are treated as zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "exponential decay over a whole-day count"
)]
pub fn decay_for_age(age_days: i64, rate: DecayRate) -> f64 {
    let days = age_days.max(0) as f64;
    (-rate.get() * days).exp()
}

/// Decay multiplier in `(0, 1]` for an interaction at `occurred_at` seen at
/// `now`.
///
/// # Examples
/// ```
/// use eventhub_core::{DecayRate, Timestamp, decay_factor};
///
/// let now = Timestamp::parse("2025-04-15")?;
/// let fortnight_ago = Timestamp::parse("2025-04-01")?;
/// assert_eq!(decay_factor(now, now, DecayRate::default()), 1.0);
/// let factor = decay_factor(fortnight_ago, now, DecayRate::default());
/// assert!((factor - (-0.7_f64).exp()).abs() < 1e-12);
/// # Ok::<(), eventhub_core::TimestampError>(())
/// ```
#[must_use]
pub fn decay_factor(occurred_at: Timestamp, now: Timestamp, rate: DecayRate) -> f64 {
    decay_for_age(whole_days_elapsed(occurred_at, now), rate)
}

/// Fixed weight for an interaction kind.
///
/// Unrecognised kinds fall back to the base weight and log a warning.
#[must_use]
pub fn interaction_weight(kind: &InteractionKind) -> f64 {
    match kind {
        InteractionKind::Review => REVIEW_WEIGHT,
        InteractionKind::Save => SAVE_WEIGHT,
        InteractionKind::View | InteractionKind::Like => BASE_WEIGHT,
        InteractionKind::Other(name) => {
            warn!("unknown interaction kind '{name}'; using base weight {BASE_WEIGHT}");
            BASE_WEIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-12;

    #[rstest]
    #[case(InteractionKind::Review, 3.0)]
    #[case(InteractionKind::Save, 2.0)]
    #[case(InteractionKind::Like, 1.0)]
    #[case(InteractionKind::View, 1.0)]
    #[case(InteractionKind::Other("share".to_owned()), 1.0)]
    #[expect(clippy::float_cmp, reason = "weights are exact table constants")]
    fn weight_table(#[case] kind: InteractionKind, #[case] expected: f64) {
        assert_eq!(interaction_weight(&kind), expected);
    }

    #[rstest]
    fn weights_are_ordered() {
        let review = interaction_weight(&InteractionKind::Review);
        let save = interaction_weight(&InteractionKind::Save);
        let view = interaction_weight(&InteractionKind::View);
        assert!(review > save && save > view);
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(-3, 1.0)]
    #[case(14, 0.496_585_303_791_409_5)]
    #[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
    fn decay_for_whole_days(#[case] age: i64, #[case] expected: f64) {
        let factor = decay_for_age(age, DecayRate::default());
        assert!((factor - expected).abs() < TOLERANCE, "got {factor}");
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
    fn default_half_life_is_about_two_weeks() {
        let half_life = DecayRate::default().half_life_days();
        assert!((half_life - 13.862_943_611_198_906).abs() < 1e-9);
    }

    #[rstest]
    fn partial_days_are_dropped() {
        let then = Timestamp::parse("2025-04-01T00:00:00Z").expect("valid");
        let now = Timestamp::parse("2025-04-01T23:59:59Z").expect("valid");
        assert_eq!(whole_days_elapsed(then, now), 0);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "future instants decay by exactly one")]
    fn future_interactions_do_not_decay() {
        let now = Timestamp::parse("2025-04-01").expect("valid");
        let later = Timestamp::parse("2025-05-01").expect("valid");
        assert_eq!(decay_factor(later, now, DecayRate::default()), 1.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.05)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_rates(#[case] lambda: f64) {
        assert!(DecayRate::new(lambda).is_err());
    }
}
