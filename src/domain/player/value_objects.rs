use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

/// Player name value object (first or last name, non-blank, at most 100
/// characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("player name cannot be blank"));
        }
        if value.chars().count() > 100 {
            return Err(DomainError::validation(
                "player name must be at most 100 characters",
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

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identification number value object
///
/// # Invariants
/// - Non-blank
/// - Unique system-wide (enforced by the validation service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationNumber(String);

impl IdentificationNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation(
                "identification number cannot be blank",
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

impl fmt::Display for IdentificationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_player_name() {
        assert!(PlayerName::new("Marta").is_ok());
    }

    #[test]
    fn blank_player_name_fails() {
        assert!(PlayerName::new("   ").is_err());
        assert!(PlayerName::new("").is_err());
    }

    #[test]
    fn overlong_player_name_fails() {
        assert!(PlayerName::new("x".repeat(101)).is_err());
    }

    #[test]
    fn valid_identification_number() {
        let number = IdentificationNumber::new("CC-1002003000").unwrap();
        assert_eq!(number.as_str(), "CC-1002003000");
    }

    #[test]
    fn blank_identification_number_fails() {
        assert!(IdentificationNumber::new("  ").is_err());
    }
}
