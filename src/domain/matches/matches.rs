use chrono::{DateTime, Utc};

use super::value_objects::MatchStatus;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{MatchId, TeamId, TournamentId};

/// Match aggregate root
///
/// References its tournament and both teams by id. Scores are absent
/// until a result is recorded; recording a result is the only path that
/// sets them, so "both scores present" and "played" coincide.
///
/// # Invariants
/// - Home and away teams differ
/// - Scores are non-negative and always set together
/// - A cancelled match never receives a result
#[derive(Debug, Clone)]
pub struct Match {
    id: Option<MatchId>,
    tournament_id: TournamentId,
    home_team_id: TeamId,
    away_team_id: TeamId,
    home_score: Option<i32>,
    away_score: Option<i32>,
    match_date: DateTime<Utc>,
    field: String,
    status: MatchStatus,
}

impl Match {
    /// Schedules a new match between two distinct teams.
    pub fn new(
        tournament_id: TournamentId,
        home_team_id: TeamId,
        away_team_id: TeamId,
        match_date: DateTime<Utc>,
        field: &str,
    ) -> DomainResult<Self> {
        if home_team_id == away_team_id {
            return Err(DomainError::validation(
                "a team cannot play against itself",
            ));
        }
        if field.trim().is_empty() {
            return Err(DomainError::validation("field cannot be blank"));
        }
        Ok(Self {
            id: None,
            tournament_id,
            home_team_id,
            away_team_id,
            home_score: None,
            away_score: None,
            match_date,
            field: field.to_string(),
            status: MatchStatus::Scheduled,
        })
    }

    /// Records the final score and marks the match as played.
    ///
    /// Recording again overwrites the previous result; a cancelled match
    /// is rejected.
    pub fn record_result(&mut self, home_score: i32, away_score: i32) -> DomainResult<()> {
        if self.status == MatchStatus::Cancelled {
            return Err(DomainError::validation(
                "cannot record a result for a cancelled match",
            ));
        }
        if home_score < 0 || away_score < 0 {
            return Err(DomainError::validation("scores cannot be negative"));
        }
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.status = MatchStatus::Played;
        Ok(())
    }

    /// Cancels the match. Only allowed while no result exists.
    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status == MatchStatus::Played {
            return Err(DomainError::validation("cannot cancel a played match"));
        }
        self.status = MatchStatus::Cancelled;
        Ok(())
    }

    /// Returns true if the given team plays in this match, home or away.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Returns `(own, opponent)` goals for the given team, or `None` when
    /// the match has no result yet or the team is not a participant.
    ///
    /// Orientation-aware: the pair is flipped when the team played away.
    pub fn played_score_for(&self, team_id: TeamId) -> Option<(i32, i32)> {
        let home = self.home_score?;
        let away = self.away_score?;
        if team_id == self.home_team_id {
            Some((home, away))
        } else if team_id == self.away_team_id {
            Some((away, home))
        } else {
            None
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> Option<MatchId> {
        self.id
    }

    pub fn tournament_id(&self) -> TournamentId {
        self.tournament_id
    }

    pub fn home_team_id(&self) -> TeamId {
        self.home_team_id
    }

    pub fn away_team_id(&self) -> TeamId {
        self.away_team_id
    }

    pub fn home_score(&self) -> Option<i32> {
        self.home_score
    }

    pub fn away_score(&self) -> Option<i32> {
        self.away_score
    }

    pub fn match_date(&self) -> DateTime<Utc> {
        self.match_date
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Reconstructs a Match from persistence layer data.
    ///
    /// Only to be used by repository implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: MatchId,
        tournament_id: TournamentId,
        home_team_id: TeamId,
        away_team_id: TeamId,
        home_score: Option<i32>,
        away_score: Option<i32>,
        match_date: DateTime<Utc>,
        field: String,
        status: MatchStatus,
    ) -> Self {
        Self {
            id: Some(id),
            tournament_id,
            home_team_id,
            away_team_id,
            home_score,
            away_score,
            match_date,
            field,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled() -> Match {
        Match::new(
            TournamentId::new(1),
            TeamId::new(10),
            TeamId::new(20),
            Utc::now(),
            "North Field",
        )
        .expect("valid match")
    }

    #[test]
    fn new_match_is_scheduled_without_scores() {
        let m = scheduled();
        assert_eq!(m.status(), MatchStatus::Scheduled);
        assert!(m.home_score().is_none());
        assert!(m.away_score().is_none());
    }

    #[test]
    fn team_cannot_play_itself() {
        let result = Match::new(
            TournamentId::new(1),
            TeamId::new(10),
            TeamId::new(10),
            Utc::now(),
            "North Field",
        );
        assert!(result.is_err());
    }

    #[test]
    fn blank_field_is_rejected() {
        let result = Match::new(
            TournamentId::new(1),
            TeamId::new(10),
            TeamId::new(20),
            Utc::now(),
            "  ",
        );
        assert!(result.is_err());
    }

    #[test]
    fn record_result_sets_scores_and_status() {
        let mut m = scheduled();
        m.record_result(2, 1).expect("result recorded");

        assert_eq!(m.status(), MatchStatus::Played);
        assert_eq!(m.home_score(), Some(2));
        assert_eq!(m.away_score(), Some(1));
    }

    #[test]
    fn negative_scores_are_rejected() {
        let mut m = scheduled();
        assert!(m.record_result(-1, 0).is_err());
        assert_eq!(m.status(), MatchStatus::Scheduled);
    }

    #[test]
    fn cancelled_match_rejects_results() {
        let mut m = scheduled();
        m.cancel().expect("cancelled");
        assert!(m.record_result(1, 0).is_err());
    }

    #[test]
    fn played_match_cannot_be_cancelled() {
        let mut m = scheduled();
        m.record_result(0, 0).unwrap();
        assert!(m.cancel().is_err());
    }

    #[test]
    fn played_score_is_oriented_to_the_team() {
        let mut m = scheduled();
        m.record_result(3, 1).unwrap();

        assert_eq!(m.played_score_for(TeamId::new(10)), Some((3, 1)));
        assert_eq!(m.played_score_for(TeamId::new(20)), Some((1, 3)));
        assert_eq!(m.played_score_for(TeamId::new(99)), None);
    }

    #[test]
    fn unplayed_match_yields_no_score() {
        let m = scheduled();
        assert_eq!(m.played_score_for(TeamId::new(10)), None);
    }

    #[test]
    fn involves_checks_both_sides() {
        let m = scheduled();
        assert!(m.involves(TeamId::new(10)));
        assert!(m.involves(TeamId::new(20)));
        assert!(!m.involves(TeamId::new(30)));
    }
}
