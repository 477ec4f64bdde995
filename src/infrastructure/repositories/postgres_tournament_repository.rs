use async_trait::async_trait;
use sqlx::PgPool;

use super::{map_sqlx_error, repository_error};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::TournamentId;
use crate::domain::repositories::TournamentRepository;
use crate::domain::tournament::{Tournament, TournamentStatus};
use crate::domain::validation::UniqueNameIndex;

/// PostgreSQL implementation of TournamentRepository
///
/// Runtime-bound SQLx queries; rows are rebuilt through
/// `Tournament::from_persistence`. The unique index on `name` is the
/// storage-level guard behind the validation service's check.
pub struct PostgresTournamentRepository {
    pool: PgPool,
}

impl PostgresTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TournamentRow {
    id: i64,
    name: String,
    description: String,
    status: String,
}

impl TournamentRow {
    fn into_domain(self) -> DomainResult<Tournament> {
        let status: TournamentStatus = self.status.parse().map_err(|_| {
            DomainError::Repository(format!("unknown tournament status: {}", self.status))
        })?;
        Ok(Tournament::from_persistence(
            TournamentId::new(self.id),
            self.name,
            self.description,
            status,
        ))
    }
}

const COLUMNS: &str = "id, name, description, status";

#[async_trait]
impl TournamentRepository for PostgresTournamentRepository {
    async fn save(&self, tournament: &Tournament) -> DomainResult<Tournament> {
        let row: TournamentRow = match tournament.id() {
            None => sqlx::query_as(
                "INSERT INTO tournaments (name, description, status)
                 VALUES ($1, $2, $3)
                 RETURNING id, name, description, status",
            )
            .bind(tournament.name())
            .bind(tournament.description())
            .bind(tournament.status().as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("tournament", tournament.name(), e))?,
            Some(id) => sqlx::query_as(
                "UPDATE tournaments
                 SET name = $2, description = $3, status = $4
                 WHERE id = $1
                 RETURNING id, name, description, status",
            )
            .bind(id.value())
            .bind(tournament.name())
            .bind(tournament.description())
            .bind(tournament.status().as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("tournament", tournament.name(), e))?
            .ok_or_else(|| DomainError::not_found("tournament", id.value()))?,
        };
        row.into_domain()
    }

    async fn find_by_id(&self, id: TournamentId) -> DomainResult<Option<Tournament>> {
        let row: Option<TournamentRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM tournaments WHERE id = $1"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(repository_error)?;
        row.map(TournamentRow::into_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Tournament>> {
        let rows: Vec<TournamentRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM tournaments ORDER BY id"))
                .fetch_all(&self.pool)
                .await
                .map_err(repository_error)?;
        rows.into_iter().map(TournamentRow::into_domain).collect()
    }

    async fn delete(&self, id: TournamentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tournaments WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("tournament", id.value()));
        }
        Ok(())
    }
}

#[async_trait]
impl UniqueNameIndex for PostgresTournamentRepository {
    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM tournaments WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(repository_error)?;
        Ok(exists)
    }

    async fn exists_by_name_and_id_not(&self, name: &str, excluded_id: i64) -> DomainResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM tournaments WHERE name = $1 AND id <> $2)",
        )
        .bind(name)
        .bind(excluded_id)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;
        Ok(exists)
    }
}
