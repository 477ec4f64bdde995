use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{DomainError, DomainResult};

/// Tournament name value object
///
/// # Invariants
/// - 3 to 100 characters after trimming
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentName(String);

impl TournamentName {
    /// Creates a new TournamentName, rejecting blank or out-of-range input.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.trim().chars().count();
        if !(3..=100).contains(&len) {
            return Err(DomainError::validation(
                "tournament name must be 3-100 characters",
            ));
        }
        Ok(Self(value))
    }

    /// Wraps an already-validated value coming back from the store.
    pub(crate) fn from_trusted(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TournamentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tournament description value object (10 to 500 characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentDescription(String);

impl TournamentDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.trim().chars().count();
        if !(10..=500).contains(&len) {
            return Err(DomainError::validation(
                "tournament description must be 10-500 characters",
            ));
        }
        Ok(Self(value))
    }

    pub(crate) fn from_trusted(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TournamentDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents the lifecycle status of a tournament
///
/// # Status Transitions
/// ```text
/// Pending -> Active -> Finished
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentStatus {
    /// Tournament has been created but not started
    Pending,
    /// Tournament is in progress
    Active,
    /// Tournament has concluded
    Finished,
}

impl TournamentStatus {
    /// Checks if a transition from the current status to `next` is valid.
    pub fn can_transition_to(&self, next: TournamentStatus) -> bool {
        use TournamentStatus::*;
        matches!((self, next), (Pending, Active) | (Active, Finished))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Pending => "pending",
            TournamentStatus::Active => "active",
            TournamentStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TournamentStatus::Pending),
            "active" => Ok(TournamentStatus::Active),
            "finished" => Ok(TournamentStatus::Finished),
            other => Err(DomainError::validation(format!(
                "unknown tournament status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tournament_name() {
        assert!(TournamentName::new("Copa Norte").is_ok());
    }

    #[test]
    fn name_shorter_than_three_chars_fails() {
        assert!(TournamentName::new("AB").is_err());
    }

    #[test]
    fn blank_name_fails() {
        assert!(TournamentName::new("   ").is_err());
    }

    #[test]
    fn name_longer_than_hundred_chars_fails() {
        assert!(TournamentName::new("x".repeat(101)).is_err());
    }

    #[test]
    fn description_shorter_than_ten_chars_fails() {
        assert!(TournamentDescription::new("too short").is_err());
        assert!(TournamentDescription::new("long enough text").is_ok());
    }

    #[test]
    fn valid_transition_pending_to_active() {
        assert!(TournamentStatus::Pending.can_transition_to(TournamentStatus::Active));
    }

    #[test]
    fn valid_transition_active_to_finished() {
        assert!(TournamentStatus::Active.can_transition_to(TournamentStatus::Finished));
    }

    #[test]
    fn invalid_transition_pending_to_finished() {
        assert!(!TournamentStatus::Pending.can_transition_to(TournamentStatus::Finished));
    }

    #[test]
    fn invalid_transition_finished_to_anything() {
        assert!(!TournamentStatus::Finished.can_transition_to(TournamentStatus::Active));
        assert!(!TournamentStatus::Finished.can_transition_to(TournamentStatus::Pending));
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            TournamentStatus::Pending,
            TournamentStatus::Active,
            TournamentStatus::Finished,
        ] {
            assert_eq!(status.to_string().parse::<TournamentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_string_fails() {
        assert!("running".parse::<TournamentStatus>().is_err());
    }
}
