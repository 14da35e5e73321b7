//! The affinity model: seeds profiles and folds interactions into them.
//!
//! Each interaction adds `interaction_weight(kind) * decay_factor(occurred_at,
//! now)` to every tag it touches. Decay only discounts the new increment;
//! stored totals are never re-decayed, so a profile grows monotonically with
//! activity.

use std::collections::BTreeSet;

use log::debug;

use crate::{
    AffinityProfile, Clock, DecayRate, Interaction, InteractionKind, SystemClock, Tag, Timestamp,
    decay::{decay_factor, interaction_weight},
};

/// Result of folding one interaction into a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub enum RecordOutcome {
    /// Every tag received `delta`.
    Applied {
        /// Amount added to each tag.
        delta: f64,
        /// Number of distinct tags reinforced.
        tags: usize,
    },
    /// The interaction carried no tags; the profile is unchanged.
    NoTags,
}

/// Contribution a single interaction makes to each of its tags.
///
/// # Examples
/// ```
/// use eventhub_core::{DecayRate, InteractionKind, Timestamp, interaction_delta};
///
/// let now = Timestamp::parse("2025-04-15")?;
/// let then = Timestamp::parse("2025-04-01")?;
/// let delta = interaction_delta(&InteractionKind::Review, then, now, DecayRate::default());
/// assert!((delta - 3.0 * (-0.7_f64).exp()).abs() < 1e-12);
/// # Ok::<(), eventhub_core::TimestampError>(())
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "delta is the product of weight and decay"
)]
pub fn interaction_delta(
    kind: &InteractionKind,
    occurred_at: Timestamp,
    now: Timestamp,
    rate: DecayRate,
) -> f64 {
    interaction_weight(kind) * decay_factor(occurred_at, now, rate)
}

/// Fold one interaction into `profile` as seen at `now`.
///
/// Each distinct tag gains the same delta. An empty tag set leaves the
/// profile untouched and reports [`RecordOutcome::NoTags`].
pub fn record_interaction(
    profile: &mut AffinityProfile,
    tags: &BTreeSet<Tag>,
    kind: &InteractionKind,
    occurred_at: Timestamp,
    now: Timestamp,
    rate: DecayRate,
) -> RecordOutcome {
    if tags.is_empty() {
        debug!("ignoring {kind} interaction without tags");
        return RecordOutcome::NoTags;
    }
    let delta = interaction_delta(kind, occurred_at, now, rate);
    for tag in tags {
        profile.reinforce(tag.clone(), delta);
    }
    debug!(
        "recorded {kind} at {occurred_at}: +{delta:.4} across {} tags",
        tags.len()
    );
    RecordOutcome::Applied {
        delta,
        tags: tags.len(),
    }
}

/// Updates affinity profiles using a decay rate and a clock.
///
/// The model holds no profile state itself; callers own one
/// [`AffinityProfile`] per session and pass it in.
///
/// # Examples
/// ```
/// use eventhub_core::{
///     AffinityModel, DecayRate, FixedClock, Interaction, InteractionKind, Tag, Timestamp,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let now = Timestamp::parse("2025-04-15")?;
/// let model = AffinityModel::new(DecayRate::default(), FixedClock::new(now));
///
/// let mut profile = model.seed([Tag::new("outdoors")?]);
/// assert_eq!(profile.affinity("outdoors"), 1.0);
///
/// let review = Interaction::from_names(["music"], InteractionKind::Review, now)?;
/// let _outcome = model.record(&mut profile, &review);
/// assert_eq!(profile.affinity("music"), 3.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AffinityModel<C = SystemClock> {
    rate: DecayRate,
    clock: C,
}

impl Default for AffinityModel<SystemClock> {
    fn default() -> Self {
        Self::new(DecayRate::default(), SystemClock)
    }
}

impl<C: Clock> AffinityModel<C> {
    /// Build a model from a decay rate and a clock.
    pub const fn new(rate: DecayRate, clock: C) -> Self {
        Self { rate, clock }
    }

    /// Configured decay rate.
    #[must_use]
    pub const fn rate(&self) -> DecayRate {
        self.rate
    }

    /// Current instant according to the model's clock.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Build a profile from declared interests.
    ///
    /// Each tag receives the weight of a `like` made right now. An empty
    /// interest set yields an empty profile.
    #[must_use]
    pub fn seed<I>(&self, interests: I) -> AffinityProfile
    where
        I: IntoIterator<Item = Tag>,
    {
        let tags: BTreeSet<Tag> = interests.into_iter().collect();
        let mut profile = AffinityProfile::new();
        let now = self.now();
        let outcome = record_interaction(
            &mut profile,
            &tags,
            &InteractionKind::Like,
            now,
            now,
            self.rate,
        );
        if let RecordOutcome::Applied { tags, .. } = outcome {
            debug!("seeded profile with {tags} interests");
        }
        profile
    }

    /// Fold `interaction` into `profile`.
    pub fn record(&self, profile: &mut AffinityProfile, interaction: &Interaction) -> RecordOutcome {
        record_interaction(
            profile,
            &interaction.tags,
            &interaction.kind,
            interaction.occurred_at,
            self.now(),
            self.rate,
        )
    }

    /// Fold an interaction given as separate parts into `profile`.
    pub fn record_interaction<I>(
        &self,
        profile: &mut AffinityProfile,
        tags: I,
        kind: &InteractionKind,
        occurred_at: Timestamp,
    ) -> RecordOutcome
    where
        I: IntoIterator<Item = Tag>,
    {
        let set: BTreeSet<Tag> = tags.into_iter().collect();
        record_interaction(profile, &set, kind, occurred_at, self.now(), self.rate)
    }

    /// Replay a sequence of interactions in order.
    ///
    /// Returns how many interactions changed the profile.
    #[must_use]
    pub fn replay<'a, I>(&self, profile: &mut AffinityProfile, interactions: I) -> usize
    where
        I: IntoIterator<Item = &'a Interaction>,
    {
        interactions
            .into_iter()
            .map(|interaction| self.record(profile, interaction))
            .filter(|outcome| matches!(outcome, RecordOutcome::Applied { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-9;

    #[fixture]
    fn model() -> AffinityModel<FixedClock> {
        let now = Timestamp::parse("2025-04-15").expect("valid now");
        AffinityModel::new(DecayRate::default(), FixedClock::new(now))
    }

    fn tag(name: &str) -> Tag {
        Tag::new(name).expect("valid tag")
    }

    fn days_ago(model: &AffinityModel<FixedClock>, days: i64) -> Timestamp {
        Timestamp::from_unix_seconds(model.now().unix_seconds() - days * 86_400)
            .expect("valid past timestamp")
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "seeding applies an undecayed unit weight")]
    fn seeding_assigns_like_weight(model: AffinityModel<FixedClock>) {
        let profile = model.seed([tag("outdoors"), tag("music")]);
        assert_eq!(profile.affinity("outdoors"), 1.0);
        assert_eq!(profile.affinity("music"), 1.0);
        assert_eq!(profile.len(), 2);
    }

    #[rstest]
    fn seeding_with_no_interests_is_empty(model: AffinityModel<FixedClock>) {
        assert!(model.seed(std::iter::empty()).is_empty());
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "duplicates collapse to one unit weight")]
    fn seeding_counts_duplicates_once(model: AffinityModel<FixedClock>) {
        let profile = model.seed([tag("food"), tag("food")]);
        assert_eq!(profile.affinity("food"), 1.0);
    }

    #[rstest]
    fn empty_interaction_is_a_no_op(model: AffinityModel<FixedClock>) {
        let mut profile = model.seed([tag("music")]);
        let before = profile.clone();
        let outcome =
            model.record_interaction(&mut profile, [], &InteractionKind::Review, model.now());
        assert_eq!(outcome, RecordOutcome::NoTags);
        assert_eq!(profile, before);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
    fn fortnight_old_review_adds_decayed_weight(model: AffinityModel<FixedClock>) {
        let mut profile = model.seed([tag("music")]);
        let occurred_at = days_ago(&model, 14);
        let outcome = model.record_interaction(
            &mut profile,
            [tag("music")],
            &InteractionKind::Review,
            occurred_at,
        );
        let expected_delta = 3.0 * (-0.7_f64).exp();
        let RecordOutcome::Applied { delta, tags } = outcome else {
            panic!("expected applied outcome, got {outcome:?}");
        };
        assert_eq!(tags, 1);
        assert!((delta - expected_delta).abs() < TOLERANCE);
        assert!((profile.affinity("music") - (1.0 + expected_delta)).abs() < TOLERANCE);
        assert!((delta - 1.49).abs() < 0.005);
    }

    #[rstest]
    fn recording_never_decreases_scores(model: AffinityModel<FixedClock>) {
        let mut profile = model.seed([tag("music"), tag("sports")]);
        let before = profile.clone();
        let occurred_at = days_ago(&model, 365);
        let _outcome = model.record_interaction(
            &mut profile,
            [tag("music")],
            &InteractionKind::View,
            occurred_at,
        );
        for (tag, score) in before.iter() {
            assert!(profile.affinity(tag) >= score);
        }
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "unknown kinds use the exact base weight")]
    fn unknown_kinds_fall_back_to_base_weight(model: AffinityModel<FixedClock>) {
        let mut profile = AffinityProfile::new();
        let _outcome = model.record_interaction(
            &mut profile,
            [tag("technology")],
            &InteractionKind::Other("share".to_owned()),
            model.now(),
        );
        assert_eq!(profile.affinity("technology"), 1.0);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "small integer sums are exact")]
    fn replay_counts_applied_interactions(model: AffinityModel<FixedClock>) {
        let now = model.now();
        let interactions = [
            Interaction::from_names(["music"], InteractionKind::Save, now).expect("valid"),
            Interaction::new([], InteractionKind::Like, now),
            Interaction::from_names(["music", "outdoors"], InteractionKind::Like, now)
                .expect("valid"),
        ];
        let mut profile = AffinityProfile::new();
        let applied = model.replay(&mut profile, &interactions);
        assert_eq!(applied, 2);
        assert_eq!(profile.affinity("music"), 3.0);
        assert_eq!(profile.affinity("outdoors"), 1.0);
    }
}
