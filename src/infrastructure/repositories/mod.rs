// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_match_repository;
pub mod postgres_player_repository;
pub mod postgres_team_repository;
pub mod postgres_tournament_repository;

pub use postgres_match_repository::PostgresMatchRepository;
pub use postgres_player_repository::PostgresPlayerRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_tournament_repository::PostgresTournamentRepository;

use crate::domain::errors::DomainError;

/// Postgres unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Translates a sqlx error into the domain taxonomy.
///
/// Unique-index violations become the same `DuplicateEntity` the
/// validation service raises, so the storage-level guard surfaces as a
/// 409 rather than a 500.
pub(crate) fn map_sqlx_error(entity: &'static str, value: &str, error: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &error {
        if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return DomainError::duplicate(entity, value);
        }
    }
    DomainError::Repository(error.to_string())
}

pub(crate) fn repository_error(error: sqlx::Error) -> DomainError {
    DomainError::Repository(error.to_string())
}
