use super::value_objects::{IdentificationNumber, PlayerName};
use crate::domain::errors::DomainResult;
use crate::domain::ids::{PlayerId, TeamId};

/// Player aggregate root
///
/// Belongs to exactly one team, referenced by id.
///
/// # Invariants
/// - Name and last name are non-blank
/// - Identification number is non-blank and unique system-wide
///   (uniqueness lives in the use-case layer)
#[derive(Debug, Clone)]
pub struct Player {
    id: Option<PlayerId>,
    team_id: TeamId,
    name: PlayerName,
    last_name: PlayerName,
    identification_number: IdentificationNumber,
}

impl Player {
    /// Creates a new Player for the given team.
    pub fn new(
        team_id: TeamId,
        name: &str,
        last_name: &str,
        identification_number: &str,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: None,
            team_id,
            name: PlayerName::new(name)?,
            last_name: PlayerName::new(last_name)?,
            identification_number: IdentificationNumber::new(identification_number)?,
        })
    }

    /// Replaces the player's fields, re-running field validation.
    pub fn update_details(
        &mut self,
        name: &str,
        last_name: &str,
        identification_number: &str,
    ) -> DomainResult<()> {
        self.name = PlayerName::new(name)?;
        self.last_name = PlayerName::new(last_name)?;
        self.identification_number = IdentificationNumber::new(identification_number)?;
        Ok(())
    }

    // ===== Getters =====

    pub fn id(&self) -> Option<PlayerId> {
        self.id
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn identification_number(&self) -> &str {
        self.identification_number.as_str()
    }

    /// Reconstructs a Player from persistence layer data.
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: PlayerId,
        team_id: TeamId,
        name: String,
        last_name: String,
        identification_number: String,
    ) -> Self {
        Self {
            id: Some(id),
            team_id,
            name: PlayerName::from_trusted(name),
            last_name: PlayerName::from_trusted(last_name),
            identification_number: IdentificationNumber::from_trusted(identification_number),
        }
    }
}
