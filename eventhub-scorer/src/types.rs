//! Public configuration types for ranking.
#![forbid(unsafe_code)]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::RankingError;

/// Secondary ordering for items whose rounded relevance is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Lower item identifiers first. Output is independent of input order.
    #[default]
    #[serde(alias = "id")]
    ItemId,
    /// Keep the order in which items were supplied.
    #[serde(alias = "input")]
    InputOrder,
}

impl TieBreak {
    /// Return the configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ItemId => "item-id",
            Self::InputOrder => "input-order",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieBreak {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "item-id" | "id" => Ok(Self::ItemId),
            "input-order" | "input" => Ok(Self::InputOrder),
            _ => Err(RankingError::UnknownTieBreak { name: s.to_owned() }),
        }
    }
}
