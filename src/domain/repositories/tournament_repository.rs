use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::ids::TournamentId;
use crate::domain::tournament::Tournament;
use crate::domain::validation::UniqueNameIndex;

/// Repository trait for the Tournament aggregate
///
/// Defines the contract for persisting and retrieving tournaments.
/// Implementations handle database-specific details; the name
/// uniqueness probe comes from the [`UniqueNameIndex`] supertrait.
#[async_trait]
pub trait TournamentRepository: UniqueNameIndex {
    /// Save a tournament. Inserting assigns the id; the persisted
    /// aggregate is returned with it set.
    async fn save(&self, tournament: &Tournament) -> DomainResult<Tournament>;

    /// Find a tournament by its id; absence is not an error.
    async fn find_by_id(&self, id: TournamentId) -> DomainResult<Option<Tournament>>;

    /// All tournaments, in repository-defined order.
    async fn find_all(&self) -> DomainResult<Vec<Tournament>>;

    /// Delete by id, failing with `NotFound` when nothing was removed.
    async fn delete(&self, id: TournamentId) -> DomainResult<()>;
}
