use async_trait::async_trait;
use sqlx::PgPool;

use super::{map_sqlx_error, repository_error};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{PlayerId, TeamId};
use crate::domain::player::Player;
use crate::domain::repositories::PlayerRepository;
use crate::domain::validation::UniqueIdentityIndex;

/// PostgreSQL implementation of PlayerRepository
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PlayerRow {
    id: i64,
    team_id: i64,
    name: String,
    last_name: String,
    identification_number: String,
}

impl PlayerRow {
    fn into_domain(self) -> Player {
        Player::from_persistence(
            PlayerId::new(self.id),
            TeamId::new(self.team_id),
            self.name,
            self.last_name,
            self.identification_number,
        )
    }
}

const COLUMNS: &str = "id, team_id, name, last_name, identification_number";

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn save(&self, player: &Player) -> DomainResult<Player> {
        let row: PlayerRow = match player.id() {
            None => sqlx::query_as(
                "INSERT INTO players (team_id, name, last_name, identification_number)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, team_id, name, last_name, identification_number",
            )
            .bind(player.team_id().value())
            .bind(player.name())
            .bind(player.last_name())
            .bind(player.identification_number())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("player", player.identification_number(), e))?,
            Some(id) => sqlx::query_as(
                "UPDATE players
                 SET name = $2, last_name = $3, identification_number = $4
                 WHERE id = $1
                 RETURNING id, team_id, name, last_name, identification_number",
            )
            .bind(id.value())
            .bind(player.name())
            .bind(player.last_name())
            .bind(player.identification_number())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("player", player.identification_number(), e))?
            .ok_or_else(|| DomainError::not_found("player", id.value()))?,
        };
        Ok(row.into_domain())
    }

    async fn find_by_id(&self, id: PlayerId) -> DomainResult<Option<Player>> {
        let row: Option<PlayerRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM players WHERE id = $1"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(repository_error)?;
        Ok(row.map(PlayerRow::into_domain))
    }

    async fn find_by_team(&self, team_id: TeamId) -> DomainResult<Vec<Player>> {
        let rows: Vec<PlayerRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM players WHERE team_id = $1 ORDER BY id"
        ))
        .bind(team_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;
        Ok(rows.into_iter().map(PlayerRow::into_domain).collect())
    }

    async fn delete(&self, id: PlayerId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("player", id.value()));
        }
        Ok(())
    }

    async fn delete_by_team(&self, team_id: TeamId) -> DomainResult<()> {
        sqlx::query("DELETE FROM players WHERE team_id = $1")
            .bind(team_id.value())
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;
        Ok(())
    }
}

#[async_trait]
impl UniqueIdentityIndex for PostgresPlayerRepository {
    async fn exists_by_identification_number(&self, number: &str) -> DomainResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM players WHERE identification_number = $1)",
        )
        .bind(number)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;
        Ok(exists)
    }

    async fn exists_by_identification_number_and_id_not(
        &self,
        number: &str,
        excluded_id: i64,
    ) -> DomainResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM players WHERE identification_number = $1 AND id <> $2)",
        )
        .bind(number)
        .bind(excluded_id)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;
        Ok(exists)
    }
}
