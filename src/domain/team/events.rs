use crate::domain::ids::{TeamId, TournamentId};

/// Domain events raised by the Team aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is created
    Created {
        team_id: TeamId,
        tournament_id: TournamentId,
        name: String,
    },
    /// Fired after a team and its players are removed
    Deleted { team_id: TeamId },
}

impl TeamEvent {
    /// Returns the team id this event refers to.
    pub fn team_id(&self) -> TeamId {
        match self {
            TeamEvent::Created { team_id, .. } => *team_id,
            TeamEvent::Deleted { team_id } => *team_id,
        }
    }
}
