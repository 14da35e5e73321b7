//! A profile shared between request handlers with a single writer at a time.
//!
//! Every mutation runs under one exclusive lock, so two concurrent updates
//! cannot both read the same prior totals and overwrite each other. Scoring
//! works on a cloned snapshot and never holds the lock.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{AffinityError, AffinityModel, AffinityProfile, Clock, Interaction, RecordOutcome};

/// Cloneable handle to one session's [`AffinityProfile`].
///
/// # Examples
/// ```
/// use eventhub_core::{
///     AffinityModel, DecayRate, FixedClock, Interaction, InteractionKind, SharedProfile, Tag,
///     Timestamp,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let now = Timestamp::parse("2025-04-15")?;
/// let model = AffinityModel::new(DecayRate::default(), FixedClock::new(now));
/// let shared = SharedProfile::new(model.seed([Tag::new("music")?]));
///
/// let like = Interaction::from_names(["music"], InteractionKind::Like, now)?;
/// let _outcome = shared.record(&model, &like)?;
/// assert_eq!(shared.snapshot()?.affinity("music"), 2.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedProfile {
    inner: Arc<Mutex<AffinityProfile>>,
}

impl SharedProfile {
    /// Wrap a profile for shared use.
    #[must_use]
    pub fn new(profile: AffinityProfile) -> Self {
        Self {
            inner: Arc::new(Mutex::new(profile)),
        }
    }

    /// Fold one interaction into the shared profile under the lock.
    ///
    /// # Errors
    /// Returns [`AffinityError::ProfileUnavailable`] if a previous writer
    /// panicked while holding the lock.
    pub fn record<C: Clock>(
        &self,
        model: &AffinityModel<C>,
        interaction: &Interaction,
    ) -> Result<RecordOutcome, AffinityError> {
        let mut guard = self.lock()?;
        Ok(model.record(&mut guard, interaction))
    }

    /// Apply an arbitrary update under the lock.
    ///
    /// # Errors
    /// Returns [`AffinityError::ProfileUnavailable`] if the lock is poisoned.
    pub fn update<T>(
        &self,
        apply: impl FnOnce(&mut AffinityProfile) -> T,
    ) -> Result<T, AffinityError> {
        let mut guard = self.lock()?;
        Ok(apply(&mut guard))
    }

    /// Clone the current profile for read-only scoring.
    ///
    /// # Errors
    /// Returns [`AffinityError::ProfileUnavailable`] if the lock is poisoned.
    pub fn snapshot(&self) -> Result<AffinityProfile, AffinityError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, AffinityProfile>, AffinityError> {
        self.inner
            .lock()
            .map_err(|_| AffinityError::ProfileUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{DecayRate, FixedClock, InteractionKind, Tag, Timestamp};

    #[test]
    #[expect(clippy::float_cmp, reason = "whole-number sums are exact")]
    fn concurrent_writers_do_not_lose_updates() {
        let now = Timestamp::parse("2025-04-15").expect("valid now");
        let model = AffinityModel::new(DecayRate::default(), FixedClock::new(now));
        let shared = SharedProfile::default();
        let like = Interaction::from_names(["music"], InteractionKind::Like, now).expect("valid");

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        let outcome = shared.record(&model, &like);
                        assert!(matches!(outcome, Ok(RecordOutcome::Applied { .. })));
                    }
                });
            }
        });

        let snapshot = shared.snapshot().expect("lock available");
        assert_eq!(snapshot.affinity("music"), 200.0);
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let shared = SharedProfile::default();
        let cloned = shared.clone();
        let result = thread::spawn(move || {
            let _: Result<(), _> = cloned.update(|_| panic!("writer failed mid-update"));
        })
        .join();
        assert!(result.is_err());

        let err = shared.snapshot().expect_err("poisoned lock");
        assert_eq!(err, AffinityError::ProfileUnavailable);
    }

    #[test]
    fn update_exposes_mutable_profile() {
        let shared = SharedProfile::default();
        let music = Tag::new("music").expect("valid tag");
        shared
            .update(|profile| profile.reinforce(music.clone(), 0.5))
            .expect("lock available");
        assert!(shared.snapshot().expect("lock available").get(&music).is_some());
    }
}
