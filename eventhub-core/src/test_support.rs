//! Fixture builders shared by unit and behaviour tests across the workspace.

use crate::{
    AffinityModel, AffinityProfile, DecayRate, FixedClock, Item, ItemError, Tag, TagError,
    Timestamp, TimestampError,
};

/// Build a profile from `(tag, affinity)` pairs.
///
/// # Errors
/// Returns [`TagError`] when a tag identifier is blank.
pub fn profile_from_pairs(pairs: &[(&str, f64)]) -> Result<AffinityProfile, TagError> {
    pairs
        .iter()
        .map(|&(name, affinity)| Tag::new(name).map(|tag| (tag, affinity)))
        .collect()
}

/// Build a model with the default decay rate and a clock frozen at `now`.
///
/// # Errors
/// Returns [`TimestampError`] when `now` does not parse.
pub fn fixed_model(now: &str) -> Result<AffinityModel<FixedClock>, TimestampError> {
    let instant = Timestamp::parse(now)?;
    Ok(AffinityModel::new(
        DecayRate::default(),
        FixedClock::new(instant),
    ))
}

/// The three-event catalogue used in demos: a jazz festival, a nature hike,
/// and a food truck fiesta.
///
/// # Errors
/// Returns [`ItemError`] only if the fixture weights are edited into an
/// invalid state.
pub fn demo_catalogue() -> Result<Vec<Item>, ItemError> {
    Ok(vec![
        Item::from_pairs(1, [("music", 1.0), ("outdoors", 0.3)])?.with_title("Jazz Festival"),
        Item::from_pairs(2, [("outdoors", 0.9)])?.with_title("Nature Hike"),
        Item::from_pairs(3, [("food", 0.8), ("outdoors", 0.5)])?.with_title("Food Truck Fiesta"),
    ])
}
