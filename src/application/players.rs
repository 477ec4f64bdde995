use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{PlayerId, TeamId, TournamentId};
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::validation;

/// Use cases for the Player aggregate.
pub struct PlayerUseCases {
    players: Arc<dyn PlayerRepository>,
    teams: Arc<dyn TeamRepository>,
}

impl PlayerUseCases {
    pub fn new(players: Arc<dyn PlayerRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { players, teams }
    }

    /// Registers a player with a team of the given tournament.
    ///
    /// The team must exist and belong to the tournament named in the
    /// request path; the identification number must be unused.
    pub async fn create(
        &self,
        tournament_id: TournamentId,
        team_id: TeamId,
        name: &str,
        last_name: &str,
        identification_number: &str,
    ) -> DomainResult<Player> {
        let team = self
            .teams
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| DomainError::not_found("team", team_id.value()))?;
        if team.tournament_id() != tournament_id {
            return Err(DomainError::not_found("team", team_id.value()));
        }
        validation::ensure_unique_identification(self.players.as_ref(), identification_number)
            .await?;

        let player = Player::new(team_id, name, last_name, identification_number)?;
        self.players.save(&player).await
    }

    /// Updates the player's fields, excluding their own id from the
    /// identification uniqueness check.
    pub async fn update(
        &self,
        id: PlayerId,
        name: &str,
        last_name: &str,
        identification_number: &str,
    ) -> DomainResult<Player> {
        validation::ensure_unique_identification_for_update(
            self.players.as_ref(),
            identification_number,
            id.value(),
        )
        .await?;
        let mut player = self
            .players
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("player", id.value()))?;

        player.update_details(name, last_name, identification_number)?;
        self.players.save(&player).await
    }

    /// Pure read passthrough; absence is not an error.
    pub async fn get(&self, id: PlayerId) -> DomainResult<Option<Player>> {
        self.players.find_by_id(id).await
    }

    /// Roster of an existing team.
    pub async fn list_by_team(&self, team_id: TeamId) -> DomainResult<Vec<Player>> {
        self.teams
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| DomainError::not_found("team", team_id.value()))?;
        self.players.find_by_team(team_id).await
    }

    pub async fn delete(&self, id: PlayerId) -> DomainResult<()> {
        self.players
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("player", id.value()))?;
        self.players.delete(id).await
    }
}
