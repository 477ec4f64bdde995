use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::ids::{TeamId, TournamentId};
use crate::domain::team::Team;
use crate::domain::validation::UniqueNameIndex;

/// Repository trait for the Team aggregate
///
/// The name probe on [`UniqueNameIndex`] is system-wide, not scoped to
/// a tournament; team names are globally unique per the current
/// contract.
#[async_trait]
pub trait TeamRepository: UniqueNameIndex {
    async fn save(&self, team: &Team) -> DomainResult<Team>;

    async fn find_by_id(&self, id: TeamId) -> DomainResult<Option<Team>>;

    /// All teams registered in the given tournament.
    async fn find_by_tournament(&self, tournament_id: TournamentId) -> DomainResult<Vec<Team>>;

    /// Delete by id, failing with `NotFound` when nothing was removed.
    async fn delete(&self, id: TeamId) -> DomainResult<()>;
}
