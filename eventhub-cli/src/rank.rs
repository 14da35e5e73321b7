//! `rank` command: score a catalogue against a freshly built profile.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use eventhub_core::Item;
use eventhub_scorer::{Ranker, TieBreak, WeightedSumScorer};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{ProfileSource, emit_json, load_json, require_existing};
use crate::{
    ARG_DECAY_RATE, ARG_INTERACTIONS, ARG_INTERESTS, ARG_NOW, ARG_OUTPUT, ARG_RANK_CATALOGUE,
    ARG_TIE_BREAK, CliError, ENV_RANK_CATALOGUE,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build a profile the same way as `eventhub profile`, then \
                 score every event in a JSON catalogue and print them from \
                 most to least relevant, each with the per-tag breakdown \
                 behind its score.",
    about = "Rank an event catalogue"
)]
#[ortho_config(prefix = "EVENTHUB")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of events.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Comma-separated interests used to seed the profile.
    #[arg(long = ARG_INTERESTS, value_name = "tags")]
    #[serde(default)]
    pub(crate) interests: Option<String>,
    /// Path to a JSON array of interactions to replay.
    #[arg(long = ARG_INTERACTIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) interactions: Option<Utf8PathBuf>,
    /// Daily decay rate applied to past interactions.
    #[arg(long = ARG_DECAY_RATE, value_name = "lambda")]
    #[serde(default)]
    pub(crate) decay_rate: Option<f64>,
    /// Instant treated as "now" (RFC 3339 or YYYY-MM-DD).
    #[arg(long = ARG_NOW, value_name = "instant")]
    #[serde(default)]
    pub(crate) now: Option<String>,
    /// Ordering for equal scores: `item-id` or `input-order`.
    #[arg(long = ARG_TIE_BREAK, value_name = "rule")]
    #[serde(default)]
    pub(crate) tie_break: Option<TieBreak>,
    /// Write the ranking to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) source: ProfileSource,
    pub(crate) tie_break: TieBreak,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalogue, ARG_RANK_CATALOGUE)?;
        self.source.validate_sources()
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_RANK_CATALOGUE,
            env: ENV_RANK_CATALOGUE,
        })?;
        let source = ProfileSource::resolve(
            args.interests.as_deref(),
            args.interactions,
            args.decay_rate,
            args.now.as_deref(),
        )?;
        Ok(Self {
            catalogue,
            source,
            tie_break: args.tie_break.unwrap_or_default(),
            output: args.output,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_rank(&config, writer)
}

pub(super) fn execute_rank(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    config.validate_sources()?;
    let items: Vec<Item> = load_json(&config.catalogue, ARG_RANK_CATALOGUE)?;
    let profile = config.source.build_profile()?;
    debug!(
        "ranking {} items against {} profile tags",
        items.len(),
        profile.len()
    );
    let ranked = Ranker::new(WeightedSumScorer)
        .with_tie_break(config.tie_break)
        .rank(&items, &profile);
    emit_json(&ranked, config.output.as_deref(), writer)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
