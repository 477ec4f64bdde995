use serde::Serialize;
use std::cmp::Ordering;

use crate::domain::ids::TeamId;
use crate::domain::matches::Match;

/// Derived team statistics, recomputed on every read.
///
/// Never persisted; always the result of folding the team's current
/// match set, so two computations over the same matches are identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamStatistics {
    pub matches_played: u32,
    pub matches_win: u32,
    pub matches_draw: u32,
    pub matches_lost: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: u32,
}

impl TeamStatistics {
    /// Folds the team's matches into its statistics.
    ///
    /// A match contributes only when both scores are present; matches
    /// without a result are excluded from every count, whatever their
    /// status says. Win: +3 points. Draw: +1 point. Loss: +0.
    pub fn from_matches(team_id: TeamId, matches: &[Match]) -> Self {
        let mut stats = Self::default();
        for m in matches {
            let Some((own, opponent)) = m.played_score_for(team_id) else {
                continue;
            };
            stats.matches_played += 1;
            stats.goals_for += own;
            stats.goals_against += opponent;
            match own.cmp(&opponent) {
                Ordering::Greater => stats.matches_win += 1,
                Ordering::Equal => stats.matches_draw += 1,
                Ordering::Less => stats.matches_lost += 1,
            }
        }
        stats.goal_difference = stats.goals_for - stats.goals_against;
        stats.points = 3 * stats.matches_win + stats.matches_draw;
        stats
    }
}
