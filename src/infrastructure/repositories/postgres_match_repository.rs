use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};

use super::repository_error;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{MatchId, TeamId, TournamentId};
use crate::domain::matches::{Match, MatchStatus};
use crate::domain::repositories::{MatchFilter, MatchRepository, Page};

/// PostgreSQL implementation of MatchRepository
///
/// The paged search builds its WHERE clause dynamically with
/// `QueryBuilder`; the count query and the page query share the same
/// filter so `total_count` stays consistent with the items.
pub struct PostgresMatchRepository {
    pool: PgPool,
}

impl PostgresMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MatchRow {
    id: i64,
    tournament_id: i64,
    home_team_id: i64,
    away_team_id: i64,
    home_score: Option<i32>,
    away_score: Option<i32>,
    match_date: DateTime<Utc>,
    field: String,
    status: String,
}

impl MatchRow {
    fn into_domain(self) -> DomainResult<Match> {
        let status: MatchStatus = self.status.parse().map_err(|_| {
            DomainError::Repository(format!("unknown match status: {}", self.status))
        })?;
        Ok(Match::from_persistence(
            MatchId::new(self.id),
            TournamentId::new(self.tournament_id),
            TeamId::new(self.home_team_id),
            TeamId::new(self.away_team_id),
            self.home_score,
            self.away_score,
            self.match_date,
            self.field,
            status,
        ))
    }
}

const COLUMNS: &str = "id, tournament_id, home_team_id, away_team_id, \
                       home_score, away_score, match_date, field, status";

fn push_filter(builder: &mut QueryBuilder<'_, sqlx::Postgres>, filter: &MatchFilter) {
    if let Some(tournament_id) = filter.tournament_id {
        builder
            .push(" AND tournament_id = ")
            .push_bind(tournament_id.value());
    }
    if let Some(team_id) = filter.team_id {
        builder
            .push(" AND (home_team_id = ")
            .push_bind(team_id.value())
            .push(" OR away_team_id = ")
            .push_bind(team_id.value())
            .push(")");
    }
    if let Some(status) = filter.status {
        builder.push(" AND status = ").push_bind(status.as_str());
    }
}

#[async_trait]
impl MatchRepository for PostgresMatchRepository {
    async fn save(&self, m: &Match) -> DomainResult<Match> {
        let row: MatchRow = match m.id() {
            None => sqlx::query_as(&format!(
                "INSERT INTO matches
                     (tournament_id, home_team_id, away_team_id, home_score,
                      away_score, match_date, field, status)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                 RETURNING {COLUMNS}"
            ))
            .bind(m.tournament_id().value())
            .bind(m.home_team_id().value())
            .bind(m.away_team_id().value())
            .bind(m.home_score())
            .bind(m.away_score())
            .bind(m.match_date())
            .bind(m.field())
            .bind(m.status().as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)?,
            Some(id) => sqlx::query_as(&format!(
                "UPDATE matches
                 SET home_score = $2, away_score = $3, match_date = $4,
                     field = $5, status = $6
                 WHERE id = $1
                 RETURNING {COLUMNS}"
            ))
            .bind(id.value())
            .bind(m.home_score())
            .bind(m.away_score())
            .bind(m.match_date())
            .bind(m.field())
            .bind(m.status().as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?
            .ok_or_else(|| DomainError::not_found("match", id.value()))?,
        };
        row.into_domain()
    }

    async fn find_by_id(&self, id: MatchId) -> DomainResult<Option<Match>> {
        let row: Option<MatchRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM matches WHERE id = $1"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(repository_error)?;
        row.map(MatchRow::into_domain).transpose()
    }

    async fn find_all_by_team(&self, team_id: TeamId) -> DomainResult<Vec<Match>> {
        let rows: Vec<MatchRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM matches
             WHERE home_team_id = $1 OR away_team_id = $1
             ORDER BY match_date, id"
        ))
        .bind(team_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;
        rows.into_iter().map(MatchRow::into_domain).collect()
    }

    async fn find_all_by_tournament(
        &self,
        tournament_id: TournamentId,
    ) -> DomainResult<Vec<Match>> {
        let rows: Vec<MatchRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM matches WHERE tournament_id = $1 ORDER BY match_date, id"
        ))
        .bind(tournament_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;
        rows.into_iter().map(MatchRow::into_domain).collect()
    }

    async fn search(&self, filter: &MatchFilter) -> DomainResult<Page<Match>> {
        let mut count_builder: QueryBuilder<'_, sqlx::Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM matches WHERE 1=1");
        push_filter(&mut count_builder, filter);
        let total_count: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)?;

        let mut builder: QueryBuilder<'_, sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM matches WHERE 1=1"));
        push_filter(&mut builder, filter);
        let offset = i64::from(filter.page_number) * i64::from(filter.page_size);
        builder
            .push(" ORDER BY match_date, id LIMIT ")
            .push_bind(i64::from(filter.page_size))
            .push(" OFFSET ")
            .push_bind(offset);

        let rows: Vec<MatchRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;
        let items = rows
            .into_iter()
            .map(MatchRow::into_domain)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page {
            items,
            total_count,
            page_number: filter.page_number,
            page_size: filter.page_size,
        })
    }

    async fn delete_by_team(&self, team_id: TeamId) -> DomainResult<()> {
        sqlx::query("DELETE FROM matches WHERE home_team_id = $1 OR away_team_id = $1")
            .bind(team_id.value())
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;
        Ok(())
    }

    async fn delete_by_tournament(&self, tournament_id: TournamentId) -> DomainResult<()> {
        sqlx::query("DELETE FROM matches WHERE tournament_id = $1")
            .bind(tournament_id.value())
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;
        Ok(())
    }
}
