//! `profile` command: build an affinity profile and print it.

use std::collections::BTreeMap;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use eventhub_core::{AffinityProfile, round_to_cents};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{ProfileSource, emit_json};
use crate::{ARG_DECAY_RATE, ARG_INTERACTIONS, ARG_INTERESTS, ARG_NOW, ARG_OUTPUT, CliError};

/// CLI arguments for the `profile` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Seed a profile from declared interests, replay an optional \
                 JSON interaction history, and print the resulting tag \
                 affinities rounded to two decimals.",
    about = "Build an affinity profile"
)]
#[ortho_config(prefix = "EVENTHUB")]
pub(crate) struct ProfileArgs {
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
    /// Write the profile to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ProfileArgs {
    pub(crate) fn into_config(self) -> Result<ProfileConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ProfileConfig::try_from(merged)
    }
}

/// Resolved `profile` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProfileConfig {
    pub(crate) source: ProfileSource,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<ProfileArgs> for ProfileConfig {
    type Error = CliError;

    fn try_from(args: ProfileArgs) -> Result<Self, Self::Error> {
        let source = ProfileSource::resolve(
            args.interests.as_deref(),
            args.interactions,
            args.decay_rate,
            args.now.as_deref(),
        )?;
        Ok(Self {
            source,
            output: args.output,
        })
    }
}

pub(super) fn run_profile(args: ProfileArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_profile_with(args, &mut stdout)
}

pub(super) fn run_profile_with(args: ProfileArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_profile(&config, writer)
}

pub(super) fn execute_profile(
    config: &ProfileConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    config.source.validate_sources()?;
    let profile = config.source.build_profile()?;
    emit_json(&rounded(&profile), config.output.as_deref(), writer)
}

fn rounded(profile: &AffinityProfile) -> BTreeMap<&str, f64> {
    profile
        .iter()
        .map(|(tag, score)| (tag.as_str(), round_to_cents(score)))
        .collect()
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ProfileConfig, CliError> {
    let merged = ProfileArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ProfileConfig::try_from(merged)
}
