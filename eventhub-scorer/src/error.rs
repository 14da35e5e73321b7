//! Error types raised while configuring ranking.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when parsing ranking options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    /// The tie-break name is not recognised.
    #[error("unknown tie-break '{name}' (expected 'item-id' or 'input-order')")]
    UnknownTieBreak {
        /// Rejected name.
        name: String,
    },
}
