//! Command-line interface for the EventHub affinity engine.
//!
//! `eventhub profile` builds an affinity profile from declared interests and
//! an optional interaction history. `eventhub rank` does the same and then
//! ranks a JSON event catalogue against the resulting profile. Options come
//! from CLI flags, configuration files, or `EVENTHUB_*` environment
//! variables, merged by `ortho_config`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod inputs;
mod profile;
mod rank;

pub use error::CliError;

use profile::{ProfileArgs, run_profile};
use rank::{RankArgs, run_rank};

pub(crate) const ARG_INTERESTS: &str = "interests";
pub(crate) const ARG_INTERACTIONS: &str = "interactions";
pub(crate) const ARG_DECAY_RATE: &str = "decay-rate";
pub(crate) const ARG_NOW: &str = "now";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_TIE_BREAK: &str = "tie-break";
pub(crate) const ARG_RANK_CATALOGUE: &str = "catalogue";
pub(crate) const ENV_RANK_CATALOGUE: &str = "EVENTHUB_CMDS_RANK_CATALOGUE";

/// Run the EventHub CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, input files, or
/// output writing fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Profile(args) => run_profile(args),
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "eventhub",
    about = "Learn tag affinities from user activity and rank events",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Build an affinity profile and print it as JSON.
    Profile(ProfileArgs),
    /// Rank an event catalogue for a profile.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
