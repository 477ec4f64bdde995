use async_trait::async_trait;
use sqlx::PgPool;

use super::{map_sqlx_error, repository_error};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{TeamId, TournamentId};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;
use crate::domain::validation::UniqueNameIndex;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: i64,
    tournament_id: i64,
    name: String,
    coach: String,
}

impl TeamRow {
    fn into_domain(self) -> Team {
        Team::from_persistence(
            TeamId::new(self.id),
            TournamentId::new(self.tournament_id),
            self.name,
            self.coach,
        )
    }
}

const COLUMNS: &str = "id, tournament_id, name, coach";

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> DomainResult<Team> {
        let row: TeamRow = match team.id() {
            None => sqlx::query_as(
                "INSERT INTO teams (tournament_id, name, coach)
                 VALUES ($1, $2, $3)
                 RETURNING id, tournament_id, name, coach",
            )
            .bind(team.tournament_id().value())
            .bind(team.name())
            .bind(team.coach())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("team", team.name(), e))?,
            Some(id) => sqlx::query_as(
                "UPDATE teams
                 SET name = $2, coach = $3
                 WHERE id = $1
                 RETURNING id, tournament_id, name, coach",
            )
            .bind(id.value())
            .bind(team.name())
            .bind(team.coach())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("team", team.name(), e))?
            .ok_or_else(|| DomainError::not_found("team", id.value()))?,
        };
        Ok(row.into_domain())
    }

    async fn find_by_id(&self, id: TeamId) -> DomainResult<Option<Team>> {
        let row: Option<TeamRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM teams WHERE id = $1"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(repository_error)?;
        Ok(row.map(TeamRow::into_domain))
    }

    async fn find_by_tournament(&self, tournament_id: TournamentId) -> DomainResult<Vec<Team>> {
        let rows: Vec<TeamRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM teams WHERE tournament_id = $1 ORDER BY id"
        ))
        .bind(tournament_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;
        Ok(rows.into_iter().map(TeamRow::into_domain).collect())
    }

    async fn delete(&self, id: TeamId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("team", id.value()));
        }
        Ok(())
    }
}

#[async_trait]
impl UniqueNameIndex for PostgresTeamRepository {
    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM teams WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(repository_error)?;
        Ok(exists)
    }

    async fn exists_by_name_and_id_not(&self, name: &str, excluded_id: i64) -> DomainResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM teams WHERE name = $1 AND id <> $2)")
                .bind(name)
                .bind(excluded_id)
                .fetch_one(&self.pool)
                .await
                .map_err(repository_error)?;
        Ok(exists)
    }
}
