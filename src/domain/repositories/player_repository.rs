use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::ids::{PlayerId, TeamId};
use crate::domain::player::Player;
use crate::domain::validation::UniqueIdentityIndex;

/// Repository trait for the Player aggregate
#[async_trait]
pub trait PlayerRepository: UniqueIdentityIndex {
    async fn save(&self, player: &Player) -> DomainResult<Player>;

    async fn find_by_id(&self, id: PlayerId) -> DomainResult<Option<Player>>;

    /// All players registered with the given team.
    async fn find_by_team(&self, team_id: TeamId) -> DomainResult<Vec<Player>>;

    /// Delete by id, failing with `NotFound` when nothing was removed.
    async fn delete(&self, id: PlayerId) -> DomainResult<()>;

    /// Remove every player of a team; used by the cascade deletes.
    async fn delete_by_team(&self, team_id: TeamId) -> DomainResult<()>;
}
