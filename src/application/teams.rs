use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::EventPublisher;
use crate::domain::ids::{TeamId, TournamentId};
use crate::domain::repositories::{
    MatchRepository, PlayerRepository, TeamRepository, TournamentRepository,
};
use crate::domain::team::{Team, TeamEvent, TeamStatistics};
use crate::domain::validation;

/// Use cases for the Team aggregate.
///
/// Team reads carry freshly aggregated statistics: the matches of the
/// team are pulled and folded on every call, never cached.
pub struct TeamUseCases {
    teams: Arc<dyn TeamRepository>,
    tournaments: Arc<dyn TournamentRepository>,
    players: Arc<dyn PlayerRepository>,
    matches: Arc<dyn MatchRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl TeamUseCases {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        tournaments: Arc<dyn TournamentRepository>,
        players: Arc<dyn PlayerRepository>,
        matches: Arc<dyn MatchRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            teams,
            tournaments,
            players,
            matches,
            publisher,
        }
    }

    /// Registers a team in an existing tournament.
    pub async fn create(
        &self,
        tournament_id: TournamentId,
        name: &str,
        coach: &str,
    ) -> DomainResult<Team> {
        self.tournaments
            .find_by_id(tournament_id)
            .await?
            .ok_or_else(|| DomainError::not_found("tournament", tournament_id.value()))?;
        validation::ensure_unique_name(self.teams.as_ref(), "team", name).await?;

        let team = Team::new(tournament_id, name, coach)?;
        let saved = self.teams.save(&team).await?;
        if let Some(id) = saved.id() {
            self.publisher.publish(
                TeamEvent::Created {
                    team_id: id,
                    tournament_id,
                    name: saved.name().to_string(),
                }
                .into(),
            );
        }
        Ok(saved)
    }

    /// Updates name and coach, excluding the team's own id from the
    /// uniqueness check.
    pub async fn update(&self, id: TeamId, name: &str, coach: &str) -> DomainResult<Team> {
        validation::ensure_unique_name_for_update(self.teams.as_ref(), "team", name, id.value())
            .await?;
        let mut team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("team", id.value()))?;

        team.update_details(name, coach)?;
        self.teams.save(&team).await
    }

    /// Loads a team together with its freshly computed statistics.
    pub async fn get_with_statistics(&self, id: TeamId) -> DomainResult<(Team, TeamStatistics)> {
        let team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("team", id.value()))?;
        let stats = self.statistics_of(id).await?;
        Ok((team, stats))
    }

    /// All teams of a tournament, each with its statistics.
    pub async fn list_by_tournament(
        &self,
        tournament_id: TournamentId,
    ) -> DomainResult<Vec<(Team, TeamStatistics)>> {
        self.tournaments
            .find_by_id(tournament_id)
            .await?
            .ok_or_else(|| DomainError::not_found("tournament", tournament_id.value()))?;

        let teams = self.teams.find_by_tournament(tournament_id).await?;
        let mut out = Vec::with_capacity(teams.len());
        for team in teams {
            let stats = match team.id() {
                Some(id) => self.statistics_of(id).await?,
                None => TeamStatistics::default(),
            };
            out.push((team, stats));
        }
        Ok(out)
    }

    /// Statistics for an existing team; `NotFound` if the team is absent.
    pub async fn statistics(&self, id: TeamId) -> DomainResult<TeamStatistics> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("team", id.value()))?;
        self.statistics_of(id).await
    }

    /// Deletes the team, its players and its matches, then publishes
    /// `TeamEvent::Deleted`.
    pub async fn delete(&self, id: TeamId) -> DomainResult<()> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("team", id.value()))?;

        self.players.delete_by_team(id).await?;
        self.matches.delete_by_team(id).await?;
        self.teams.delete(id).await?;

        self.publisher
            .publish(TeamEvent::Deleted { team_id: id }.into());
        Ok(())
    }

    async fn statistics_of(&self, id: TeamId) -> DomainResult<TeamStatistics> {
        let matches = self.matches.find_all_by_team(id).await?;
        Ok(TeamStatistics::from_matches(id, &matches))
    }
}
