use crate::domain::ids::TournamentId;

/// Domain events raised by the Tournament aggregate.
///
/// Published in-process after the corresponding write succeeds;
/// listeners get no delivery guarantee beyond that dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TournamentEvent {
    /// Fired when a tournament is created
    Created {
        tournament_id: TournamentId,
        name: String,
    },
    /// Fired after a tournament and all of its teams and players are removed
    Deleted { tournament_id: TournamentId },
}

impl TournamentEvent {
    /// Returns the tournament id this event refers to.
    pub fn tournament_id(&self) -> TournamentId {
        match self {
            TournamentEvent::Created { tournament_id, .. } => *tournament_id,
            TournamentEvent::Deleted { tournament_id } => *tournament_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_event_carries_its_tournament_id() {
        let event = TournamentEvent::Created {
            tournament_id: TournamentId::new(4),
            name: "Cup A".to_string(),
        };
        assert_eq!(event.tournament_id(), TournamentId::new(4));
    }

    #[test]
    fn deleted_event_carries_its_tournament_id() {
        let event = TournamentEvent::Deleted {
            tournament_id: TournamentId::new(4),
        };
        assert_eq!(event.tournament_id(), TournamentId::new(4));
    }
}
