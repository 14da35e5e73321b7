//! Error types emitted by the EventHub CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use eventhub_core::{AffinityError, TagError, TimestampError};
use thiserror::Error;

/// Errors emitted by the EventHub CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A declared interest is not a usable tag.
    #[error("invalid {field} entry: {source}")]
    InvalidInterest {
        /// Option that supplied the interest.
        field: &'static str,
        /// Tag validation failure.
        #[source]
        source: TagError,
    },
    /// The `--now` override could not be parsed.
    #[error("invalid {field} value {value:?}: {source}")]
    InvalidNow {
        /// Option that supplied the value.
        field: &'static str,
        /// Rejected input.
        value: String,
        /// Parse failure.
        #[source]
        source: TimestampError,
    },
    /// The affinity model rejected its configuration.
    #[error(transparent)]
    Affinity(#[from] AffinityError),
    /// Reading an input file failed.
    #[error("failed to read {field} file {path:?}: {source}")]
    ReadInput {
        /// Option that named the file.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An input file did not contain the expected JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option that named the file.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output to stdout failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing command output to a file failed.
    #[error("failed to write output file {path:?}: {source}")]
    WriteOutputFile {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}
