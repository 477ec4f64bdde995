use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

/// Team name value object
///
/// # Invariants
/// - 3 to 100 characters after trimming
/// - Unique across the whole system (enforced by the validation service,
///   not by this type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamName(String);

impl TeamName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.trim().chars().count();
        if !(3..=100).contains(&len) {
            return Err(DomainError::validation("team name must be 3-100 characters"));
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

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coach name value object (3 to 100 characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachName(String);

impl CoachName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.trim().chars().count();
        if !(3..=100).contains(&len) {
            return Err(DomainError::validation(
                "coach name must be 3-100 characters",
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

impl fmt::Display for CoachName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_team_name() {
        assert!(TeamName::new("Rovers").is_ok());
    }

    #[test]
    fn blank_team_name_fails() {
        assert!(TeamName::new("  ").is_err());
    }

    #[test]
    fn two_char_team_name_fails() {
        assert!(TeamName::new("FC").is_err());
    }

    #[test]
    fn overlong_team_name_fails() {
        assert!(TeamName::new("x".repeat(101)).is_err());
    }

    #[test]
    fn valid_coach_name() {
        let coach = CoachName::new("Ana Reyes").unwrap();
        assert_eq!(coach.as_str(), "Ana Reyes");
    }

    #[test]
    fn short_coach_name_fails() {
        assert!(CoachName::new("Al").is_err());
    }
}
