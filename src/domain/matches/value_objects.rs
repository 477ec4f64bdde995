use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// Represents the lifecycle status of a match.
///
/// A match starts `Scheduled`, becomes `Played` when a result is
/// recorded, or `Cancelled` if it is called off before a result exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Scheduled,
    Played,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Played => "played",
            MatchStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "played" => Ok(MatchStatus::Played),
            "cancelled" => Ok(MatchStatus::Cancelled),
            other => Err(DomainError::validation(format!(
                "unknown match status: {other}"
            ))),
        }
    }
}
