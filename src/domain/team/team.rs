use super::value_objects::{CoachName, TeamName};
use crate::domain::errors::DomainResult;
use crate::domain::ids::{TeamId, TournamentId};

/// Team aggregate root
///
/// Belongs to exactly one tournament, referenced by id. Players and
/// matches reference the team by id; the aggregate itself stays flat.
///
/// # Invariants
/// - Name is 3-100 characters and globally unique (uniqueness lives in
///   the use-case layer; the repository contract has no tournament-scoped
///   existence check, so the name is unique per system, not per tournament)
/// - Coach name is 3-100 characters
#[derive(Debug, Clone)]
pub struct Team {
    id: Option<TeamId>,
    tournament_id: TournamentId,
    name: TeamName,
    coach: CoachName,
}

impl Team {
    /// Creates a new Team for the given tournament.
    pub fn new(tournament_id: TournamentId, name: &str, coach: &str) -> DomainResult<Self> {
        Ok(Self {
            id: None,
            tournament_id,
            name: TeamName::new(name)?,
            coach: CoachName::new(coach)?,
        })
    }

    /// Replaces name and coach, re-running field validation.
    pub fn update_details(&mut self, name: &str, coach: &str) -> DomainResult<()> {
        self.name = TeamName::new(name)?;
        self.coach = CoachName::new(coach)?;
        Ok(())
    }

    // ===== Getters =====

    pub fn id(&self) -> Option<TeamId> {
        self.id
    }

    pub fn tournament_id(&self) -> TournamentId {
        self.tournament_id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn coach(&self) -> &str {
        self.coach.as_str()
    }

    /// Reconstructs a Team from persistence layer data.
    ///
    /// Bypasses field validation; only to be used by repository
    /// implementations.
    pub fn from_persistence(
        id: TeamId,
        tournament_id: TournamentId,
        name: String,
        coach: String,
    ) -> Self {
        Self {
            id: Some(id),
            tournament_id,
            name: TeamName::from_trusted(name),
            coach: CoachName::from_trusted(coach),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_team_has_no_id_until_saved() {
        let team = Team::new(TournamentId::new(1), "Rovers", "Ana Reyes").expect("valid team");

        assert!(team.id().is_none());
        assert_eq!(team.tournament_id(), TournamentId::new(1));
        assert_eq!(team.name(), "Rovers");
        assert_eq!(team.coach(), "Ana Reyes");
    }

    #[test]
    fn new_team_with_short_name_fails() {
        assert!(Team::new(TournamentId::new(1), "FC", "Ana Reyes").is_err());
    }

    #[test]
    fn new_team_with_short_coach_fails() {
        assert!(Team::new(TournamentId::new(1), "Rovers", "A").is_err());
    }

    #[test]
    fn update_details_revalidates_fields() {
        let mut team = Team::new(TournamentId::new(1), "Rovers", "Ana Reyes").unwrap();

        assert!(team.update_details("R", "Ana Reyes").is_err());
        assert!(team.update_details("Wanderers", "Luis Soto").is_ok());
        assert_eq!(team.name(), "Wanderers");
        assert_eq!(team.coach(), "Luis Soto");
    }

    #[test]
    fn from_persistence_carries_the_stored_id() {
        let team = Team::from_persistence(
            TeamId::new(5),
            TournamentId::new(1),
            "Rovers".to_string(),
            "Ana Reyes".to_string(),
        );

        assert_eq!(team.id(), Some(TeamId::new(5)));
    }
}
