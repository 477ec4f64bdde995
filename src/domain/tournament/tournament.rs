use super::value_objects::{TournamentDescription, TournamentName, TournamentStatus};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::TournamentId;

/// Tournament aggregate root
///
/// Owns its name, description and lifecycle status. Teams reference the
/// tournament by id; the aggregate never holds its teams in memory.
///
/// # Invariants
/// - Name is 3-100 characters (uniqueness is enforced by the use-case layer)
/// - Description is 10-500 characters
/// - Status changes follow Pending -> Active -> Finished
#[derive(Debug, Clone)]
pub struct Tournament {
    id: Option<TournamentId>,
    name: TournamentName,
    description: TournamentDescription,
    status: TournamentStatus,
}

impl Tournament {
    /// Creates a new Tournament in `Pending` status.
    ///
    /// The id stays unset until the repository assigns one on first save.
    pub fn new(name: &str, description: &str) -> DomainResult<Self> {
        Ok(Self {
            id: None,
            name: TournamentName::new(name)?,
            description: TournamentDescription::new(description)?,
            status: TournamentStatus::Pending,
        })
    }

    /// Replaces name and description, re-running field validation.
    pub fn update_details(&mut self, name: &str, description: &str) -> DomainResult<()> {
        self.name = TournamentName::new(name)?;
        self.description = TournamentDescription::new(description)?;
        Ok(())
    }

    /// Moves the tournament to `next`, rejecting invalid transitions.
    pub fn transition_to(&mut self, next: TournamentStatus) -> DomainResult<()> {
        if next == self.status {
            return Ok(());
        }
        if !self.status.can_transition_to(next) {
            return Err(DomainError::validation(format!(
                "cannot move tournament from {} to {}",
                self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }

    // ===== Getters =====

    pub fn id(&self) -> Option<TournamentId> {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn status(&self) -> TournamentStatus {
        self.status
    }

    /// Reconstructs a Tournament from persistence layer data.
    ///
    /// Bypasses field validation; the values were validated when written.
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: TournamentId,
        name: String,
        description: String,
        status: TournamentStatus,
    ) -> Self {
        Self {
            id: Some(id),
            name: TournamentName::from_trusted(name),
            description: TournamentDescription::from_trusted(description),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tournament_starts_pending_without_id() {
        let tournament =
            Tournament::new("Cup A", "Regional knockout cup").expect("valid tournament");

        assert_eq!(tournament.name(), "Cup A");
        assert_eq!(tournament.status(), TournamentStatus::Pending);
        assert!(tournament.id().is_none());
    }

    #[test]
    fn new_tournament_with_short_name_fails() {
        assert!(Tournament::new("CA", "Regional knockout cup").is_err());
    }

    #[test]
    fn new_tournament_with_short_description_fails() {
        assert!(Tournament::new("Cup A", "short").is_err());
    }

    #[test]
    fn update_details_revalidates_fields() {
        let mut tournament =
            Tournament::new("Cup A", "Regional knockout cup").expect("valid tournament");

        assert!(tournament.update_details("Cup B", "bad").is_err());
        assert!(tournament
            .update_details("Cup B", "Another long description")
            .is_ok());
        assert_eq!(tournament.name(), "Cup B");
    }

    #[test]
    fn transition_follows_lifecycle() {
        let mut tournament =
            Tournament::new("Cup A", "Regional knockout cup").expect("valid tournament");

        assert!(tournament.transition_to(TournamentStatus::Finished).is_err());
        assert!(tournament.transition_to(TournamentStatus::Active).is_ok());
        assert!(tournament.transition_to(TournamentStatus::Finished).is_ok());
    }

    #[test]
    fn transition_to_current_status_is_a_no_op() {
        let mut tournament =
            Tournament::new("Cup A", "Regional knockout cup").expect("valid tournament");

        assert!(tournament.transition_to(TournamentStatus::Pending).is_ok());
        assert_eq!(tournament.status(), TournamentStatus::Pending);
    }

    #[test]
    fn from_persistence_carries_the_stored_id() {
        let tournament = Tournament::from_persistence(
            TournamentId::new(9),
            "Cup A".to_string(),
            "Regional knockout cup".to_string(),
            TournamentStatus::Active,
        );

        assert_eq!(tournament.id(), Some(TournamentId::new(9)));
        assert_eq!(tournament.status(), TournamentStatus::Active);
    }
}
