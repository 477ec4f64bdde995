use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{MatchId, TeamId, TournamentId};
use crate::domain::matches::Match;
use crate::domain::repositories::{
    MatchFilter, MatchRepository, Page, TeamRepository, TournamentRepository,
};

/// Use cases for the Match aggregate.
pub struct MatchUseCases {
    matches: Arc<dyn MatchRepository>,
    teams: Arc<dyn TeamRepository>,
    tournaments: Arc<dyn TournamentRepository>,
}

impl MatchUseCases {
    pub fn new(
        matches: Arc<dyn MatchRepository>,
        teams: Arc<dyn TeamRepository>,
        tournaments: Arc<dyn TournamentRepository>,
    ) -> Self {
        Self {
            matches,
            teams,
            tournaments,
        }
    }

    /// Schedules a match between two teams of the same tournament.
    pub async fn schedule(
        &self,
        tournament_id: TournamentId,
        home_team_id: TeamId,
        away_team_id: TeamId,
        match_date: DateTime<Utc>,
        field: &str,
    ) -> DomainResult<Match> {
        self.tournaments
            .find_by_id(tournament_id)
            .await?
            .ok_or_else(|| DomainError::not_found("tournament", tournament_id.value()))?;
        self.team_in_tournament(home_team_id, tournament_id).await?;
        self.team_in_tournament(away_team_id, tournament_id).await?;

        let m = Match::new(tournament_id, home_team_id, away_team_id, match_date, field)?;
        self.matches.save(&m).await
    }

    /// Records the final score of a match.
    pub async fn record_result(
        &self,
        id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> DomainResult<Match> {
        let mut m = self
            .matches
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("match", id.value()))?;
        m.record_result(home_score, away_score)?;
        self.matches.save(&m).await
    }

    /// Cancels a match that has no result yet.
    pub async fn cancel(&self, id: MatchId) -> DomainResult<Match> {
        let mut m = self
            .matches
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("match", id.value()))?;
        m.cancel()?;
        self.matches.save(&m).await
    }

    /// Pure read passthrough; absence is not an error.
    pub async fn get(&self, id: MatchId) -> DomainResult<Option<Match>> {
        self.matches.find_by_id(id).await
    }

    pub async fn list_by_tournament(&self, tournament_id: TournamentId) -> DomainResult<Vec<Match>> {
        self.tournaments
            .find_by_id(tournament_id)
            .await?
            .ok_or_else(|| DomainError::not_found("tournament", tournament_id.value()))?;
        self.matches.find_all_by_tournament(tournament_id).await
    }

    /// Offset/filter page over matches.
    pub async fn search(&self, filter: &MatchFilter) -> DomainResult<Page<Match>> {
        self.matches.search(filter).await
    }

    async fn team_in_tournament(
        &self,
        team_id: TeamId,
        tournament_id: TournamentId,
    ) -> DomainResult<()> {
        let team = self
            .teams
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| DomainError::not_found("team", team_id.value()))?;
        if team.tournament_id() != tournament_id {
            return Err(DomainError::not_found("team", team_id.value()));
        }
        Ok(())
    }
}
