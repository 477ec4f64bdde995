use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::DomainResult;
use crate::domain::ids::{MatchId, TeamId, TournamentId};
use crate::domain::matches::{Match, MatchStatus};

/// Filter for the paged match search. All criteria are optional and
/// combined with AND; `page_number` is zero-based.
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub tournament_id: Option<TournamentId>,
    pub team_id: Option<TeamId>,
    pub status: Option<MatchStatus>,
    pub page_number: u32,
    pub page_size: u32,
}

/// One page of a search result, with the total row count across all
/// pages.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page_number: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Maps the items while keeping the paging envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

/// Repository trait for the Match aggregate
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn save(&self, m: &Match) -> DomainResult<Match>;

    async fn find_by_id(&self, id: MatchId) -> DomainResult<Option<Match>>;

    /// Every match in which the team appears, home or away.
    async fn find_all_by_team(&self, team_id: TeamId) -> DomainResult<Vec<Match>>;

    async fn find_all_by_tournament(&self, tournament_id: TournamentId)
        -> DomainResult<Vec<Match>>;

    /// Offset/filter page over matches, ordered by match date.
    async fn search(&self, filter: &MatchFilter) -> DomainResult<Page<Match>>;

    /// Remove every match involving the team; used by the cascade deletes.
    async fn delete_by_team(&self, team_id: TeamId) -> DomainResult<()>;

    /// Remove every match of a tournament; used by the cascade deletes.
    async fn delete_by_tournament(&self, tournament_id: TournamentId) -> DomainResult<()>;
}
