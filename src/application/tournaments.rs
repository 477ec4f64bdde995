use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::EventPublisher;
use crate::domain::ids::TournamentId;
use crate::domain::repositories::{
    MatchRepository, PlayerRepository, TeamRepository, TournamentRepository,
};
use crate::domain::tournament::{Tournament, TournamentEvent, TournamentStatus};
use crate::domain::validation;

/// Use cases for the Tournament aggregate.
///
/// Orchestrates uniqueness validation, persistence and event
/// publication. Deleting a tournament cascades over its matches, its
/// teams' players and its teams before removing the tournament itself.
pub struct TournamentUseCases {
    tournaments: Arc<dyn TournamentRepository>,
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
    matches: Arc<dyn MatchRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl TournamentUseCases {
    pub fn new(
        tournaments: Arc<dyn TournamentRepository>,
        teams: Arc<dyn TeamRepository>,
        players: Arc<dyn PlayerRepository>,
        matches: Arc<dyn MatchRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            tournaments,
            teams,
            players,
            matches,
            publisher,
        }
    }

    /// Creates a tournament in `Pending` status.
    ///
    /// The uniqueness check and field validation both run strictly
    /// before the insert.
    pub async fn create(&self, name: &str, description: &str) -> DomainResult<Tournament> {
        validation::ensure_unique_name(self.tournaments.as_ref(), "tournament", name).await?;
        let tournament = Tournament::new(name, description)?;
        let saved = self.tournaments.save(&tournament).await?;
        if let Some(id) = saved.id() {
            self.publisher.publish(
                TournamentEvent::Created {
                    tournament_id: id,
                    name: saved.name().to_string(),
                }
                .into(),
            );
        }
        Ok(saved)
    }

    /// Updates name, description and optionally the status.
    ///
    /// The name check excludes the tournament's own id, so an update
    /// keeping the current name passes.
    pub async fn update(
        &self,
        id: TournamentId,
        name: &str,
        description: &str,
        status: Option<TournamentStatus>,
    ) -> DomainResult<Tournament> {
        validation::ensure_unique_name_for_update(
            self.tournaments.as_ref(),
            "tournament",
            name,
            id.value(),
        )
        .await?;
        let mut tournament = self
            .tournaments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("tournament", id.value()))?;

        tournament.update_details(name, description)?;
        if let Some(next) = status {
            tournament.transition_to(next)?;
        }
        self.tournaments.save(&tournament).await
    }

    /// Pure read passthrough; absence is not an error.
    pub async fn get(&self, id: TournamentId) -> DomainResult<Option<Tournament>> {
        self.tournaments.find_by_id(id).await
    }

    pub async fn list(&self) -> DomainResult<Vec<Tournament>> {
        self.tournaments.find_all().await
    }

    /// Deletes the tournament and everything it owns, then publishes
    /// exactly one `TournamentEvent::Deleted`.
    pub async fn delete(&self, id: TournamentId) -> DomainResult<()> {
        self.tournaments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("tournament", id.value()))?;

        self.matches.delete_by_tournament(id).await?;
        let teams = self.teams.find_by_tournament(id).await?;
        for team in &teams {
            if let Some(team_id) = team.id() {
                self.players.delete_by_team(team_id).await?;
                self.teams.delete(team_id).await?;
            }
        }
        self.tournaments.delete(id).await?;

        self.publisher
            .publish(TournamentEvent::Deleted { tournament_id: id }.into());
        Ok(())
    }
}
