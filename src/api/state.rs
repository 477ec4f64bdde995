use std::sync::Arc;

use crate::application::{MatchUseCases, PlayerUseCases, TeamUseCases, TournamentUseCases};
use crate::domain::events::EventPublisher;
use crate::domain::repositories::{
    MatchRepository, PlayerRepository, TeamRepository, TournamentRepository,
};

/// Shared handler state: the repository ports and the event publisher.
///
/// Handlers assemble use cases from these; the concrete adapters are
/// chosen once at startup.
#[derive(Clone)]
pub struct AppState {
    pub tournaments: Arc<dyn TournamentRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub players: Arc<dyn PlayerRepository>,
    pub matches: Arc<dyn MatchRepository>,
    pub publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn tournament_usecases(&self) -> TournamentUseCases {
        TournamentUseCases::new(
            self.tournaments.clone(),
            self.teams.clone(),
            self.players.clone(),
            self.matches.clone(),
            self.publisher.clone(),
        )
    }

    pub fn team_usecases(&self) -> TeamUseCases {
        TeamUseCases::new(
            self.teams.clone(),
            self.tournaments.clone(),
            self.players.clone(),
            self.matches.clone(),
            self.publisher.clone(),
        )
    }

    pub fn player_usecases(&self) -> PlayerUseCases {
        PlayerUseCases::new(self.players.clone(), self.teams.clone())
    }

    pub fn match_usecases(&self) -> MatchUseCases {
        MatchUseCases::new(
            self.matches.clone(),
            self.teams.clone(),
            self.tournaments.clone(),
        )
    }
}
