#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for ranking the demo catalogue.

use std::cell::RefCell;

use eventhub_core::{
    AffinityProfile, Item, ScoredItem,
    test_support::{demo_catalogue, profile_from_pairs},
};
use eventhub_scorer::rank;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state shared between steps.
#[derive(Debug, Default)]
struct RankingWorld {
    catalogue: RefCell<Vec<Item>>,
    profile: RefCell<AffinityProfile>,
    ranked: RefCell<Vec<ScoredItem>>,
}

impl RankingWorld {
    fn set_profile(&self, pairs: &[(&str, f64)]) {
        self.profile
            .replace(profile_from_pairs(pairs).expect("valid profile tags"));
    }

    fn titles(&self) -> Vec<String> {
        self.ranked
            .borrow()
            .iter()
            .map(|scored| scored.item().title().unwrap_or_default().to_owned())
            .collect()
    }

    fn breakdown_tags(&self, title: &str) -> Vec<String> {
        let ranked = self.ranked.borrow();
        let scored = ranked
            .iter()
            .find(|scored| scored.item().title() == Some(title))
            .expect("ranked item present");
        scored
            .breakdown()
            .iter()
            .map(|row| row.tag.to_string())
            .collect()
    }
}

#[fixture]
fn world() -> RankingWorld {
    RankingWorld::default()
}

fn assert_ranking(world: &RankingWorld, expected: &[&str]) {
    assert_eq!(world.titles(), expected);
}

#[expect(clippy::float_cmp, reason = "reported relevance is rounded")]
fn assert_top_relevance(world: &RankingWorld, expected: f64) {
    let ranked = world.ranked.borrow();
    let top = ranked.first().expect("non-empty ranking");
    assert_eq!(top.reported_relevance(), expected);
}

#[given("the demo event catalogue")]
fn demo_events(world: &RankingWorld) {
    world
        .catalogue
        .replace(demo_catalogue().expect("demo catalogue is valid"));
}

#[given("a profile with outdoors affinity 1.0")]
fn outdoors_profile(world: &RankingWorld) {
    world.set_profile(&[("outdoors", 1.0)]);
}

#[given("a profile with music affinity 2.49 and outdoors affinity 1.0")]
fn music_profile(world: &RankingWorld) {
    world.set_profile(&[("music", 2.49), ("outdoors", 1.0)]);
}

#[given("a profile with food affinity 2.0 and outdoors affinity 1.0")]
fn food_profile(world: &RankingWorld) {
    world.set_profile(&[("food", 2.0), ("outdoors", 1.0)]);
}

#[when("I rank the catalogue")]
fn rank_catalogue(world: &RankingWorld) {
    let ranked = rank(&world.catalogue.borrow(), &world.profile.borrow());
    world.ranked.replace(ranked);
}

#[then("the ranking is Nature Hike, Food Truck Fiesta, Jazz Festival")]
fn hike_first(world: &RankingWorld) {
    assert_ranking(world, &["Nature Hike", "Food Truck Fiesta", "Jazz Festival"]);
}

#[then("the ranking is Jazz Festival, Nature Hike, Food Truck Fiesta")]
fn festival_first(world: &RankingWorld) {
    assert_ranking(world, &["Jazz Festival", "Nature Hike", "Food Truck Fiesta"]);
}

#[then("the ranking is Food Truck Fiesta, Nature Hike, Jazz Festival")]
fn fiesta_first(world: &RankingWorld) {
    assert_ranking(world, &["Food Truck Fiesta", "Nature Hike", "Jazz Festival"]);
}

#[then("the top relevance is 0.90")]
fn top_is_hike_score(world: &RankingWorld) {
    assert_top_relevance(world, 0.9);
}

#[then("the top relevance is 2.79")]
fn top_is_festival_score(world: &RankingWorld) {
    assert_top_relevance(world, 2.79);
}

#[then("the top relevance is 2.10")]
fn top_is_fiesta_score(world: &RankingWorld) {
    assert_top_relevance(world, 2.1);
}

#[then("the top breakdown lists music and outdoors")]
fn top_breakdown_lists_both(world: &RankingWorld) {
    assert_eq!(world.breakdown_tags("Jazz Festival"), ["music", "outdoors"]);
}

#[then("the Jazz Festival breakdown lists only outdoors")]
fn festival_breakdown_outdoors_only(world: &RankingWorld) {
    assert_eq!(world.breakdown_tags("Jazz Festival"), ["outdoors"]);
}

#[scenario(path = "tests/features/relevance.feature", index = 0)]
fn outdoors_interest_ranking(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/relevance.feature", index = 1)]
fn reinforced_music_ranking(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/relevance.feature", index = 2)]
fn food_and_outdoors_ranking(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/relevance.feature", index = 3)]
fn breakdown_omits_unknown_tags(world: RankingWorld) {
    let _ = world;
}
