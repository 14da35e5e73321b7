//! Profile inputs shared by every subcommand: interests, interaction
//! history, decay rate, and the instant treated as "now".

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use eventhub_core::{
    AffinityModel, AffinityProfile, Clock, DecayRate, FixedClock, Interaction, SystemClock, Tag,
    Timestamp,
};
use log::info;
use serde::{Serialize, de::DeserializeOwned};

use crate::{ARG_INTERACTIONS, ARG_INTERESTS, ARG_NOW, CliError};

/// Resolved inputs for building one affinity profile.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProfileSource {
    pub(crate) interests: Vec<Tag>,
    pub(crate) interactions: Option<Utf8PathBuf>,
    pub(crate) decay_rate: DecayRate,
    pub(crate) now: Option<Timestamp>,
}

impl ProfileSource {
    /// Validate raw option values.
    pub(crate) fn resolve(
        interests: Option<&str>,
        interactions: Option<Utf8PathBuf>,
        decay_rate: Option<f64>,
        now: Option<&str>,
    ) -> Result<Self, CliError> {
        let interests = interests.map(parse_interests).transpose()?.unwrap_or_default();
        let decay_rate = decay_rate
            .map(DecayRate::new)
            .transpose()?
            .unwrap_or_default();
        let now = now
            .map(|value| {
                Timestamp::parse(value).map_err(|source| CliError::InvalidNow {
                    field: ARG_NOW,
                    value: value.to_owned(),
                    source,
                })
            })
            .transpose()?;
        Ok(Self {
            interests,
            interactions,
            decay_rate,
            now,
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.interactions {
            Some(path) => require_existing(path, ARG_INTERACTIONS),
            None => Ok(()),
        }
    }

    /// Seed from the declared interests, then replay the interaction file.
    ///
    /// The clock is read once so every interaction decays against the same
    /// instant.
    pub(crate) fn build_profile(&self) -> Result<AffinityProfile, CliError> {
        let now = self.now.unwrap_or_else(|| SystemClock.now());
        let model = AffinityModel::new(self.decay_rate, FixedClock::new(now));
        let mut profile = model.seed(self.interests.iter().cloned());
        if let Some(path) = &self.interactions {
            let history: Vec<Interaction> = load_json(path, ARG_INTERACTIONS)?;
            let applied = model.replay(&mut profile, &history);
            info!(
                "replayed {applied} of {} interactions from {path}",
                history.len()
            );
        }
        Ok(profile)
    }
}

/// Split a comma-separated interest list into tags, skipping blank entries.
pub(crate) fn parse_interests(raw: &str) -> Result<Vec<Tag>, CliError> {
    raw.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            Tag::new(entry).map_err(|source| CliError::InvalidInterest {
                field: ARG_INTERESTS,
                source,
            })
        })
        .collect()
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match eventhub_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON document named by option `field`.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let payload = eventhub_fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&payload).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print `value` to `output` when given, otherwise to `writer`.
pub(crate) fn emit_json<T: Serialize + ?Sized>(
    value: &T,
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    payload.push('\n');
    match output {
        Some(path) => eventhub_fs::write_file(path, payload.as_bytes()).map_err(|source| {
            CliError::WriteOutputFile {
                path: path.to_path_buf(),
                source,
            }
        }),
        None => writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput),
    }
}
