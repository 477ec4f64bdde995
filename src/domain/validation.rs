//! Uniqueness validation service.
//!
//! One algorithm, different backing collections: tournament and team
//! names go through [`UniqueNameIndex`], player identification numbers
//! through [`UniqueIdentityIndex`]. The checks are read-only and not
//! atomic against concurrent inserts; the database unique indexes are
//! the last-resort guard for that race.

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};

/// Existence probe over a uniquely-named collection.
///
/// Implemented by the tournament and team repository ports.
#[async_trait]
pub trait UniqueNameIndex: Send + Sync {
    async fn exists_by_name(&self, name: &str) -> DomainResult<bool>;

    /// Like `exists_by_name`, ignoring the record with the given id.
    async fn exists_by_name_and_id_not(&self, name: &str, excluded_id: i64) -> DomainResult<bool>;
}

/// Existence probe over player identification numbers.
#[async_trait]
pub trait UniqueIdentityIndex: Send + Sync {
    async fn exists_by_identification_number(&self, number: &str) -> DomainResult<bool>;

    async fn exists_by_identification_number_and_id_not(
        &self,
        number: &str,
        excluded_id: i64,
    ) -> DomainResult<bool>;
}

/// Fails with `DuplicateEntity` if any record already carries `name`.
pub async fn ensure_unique_name<R>(repo: &R, entity: &'static str, name: &str) -> DomainResult<()>
where
    R: UniqueNameIndex + ?Sized,
{
    if repo.exists_by_name(name).await? {
        return Err(DomainError::duplicate(entity, name));
    }
    Ok(())
}

/// Fails with `DuplicateEntity` if any record other than `excluded_id`
/// carries `name`. Updating a record to its own current name passes.
pub async fn ensure_unique_name_for_update<R>(
    repo: &R,
    entity: &'static str,
    name: &str,
    excluded_id: i64,
) -> DomainResult<()>
where
    R: UniqueNameIndex + ?Sized,
{
    if repo.exists_by_name_and_id_not(name, excluded_id).await? {
        return Err(DomainError::duplicate(entity, name));
    }
    Ok(())
}

/// Fails with `DuplicateEntity` if any player already carries `number`.
pub async fn ensure_unique_identification<R>(repo: &R, number: &str) -> DomainResult<()>
where
    R: UniqueIdentityIndex + ?Sized,
{
    if repo.exists_by_identification_number(number).await? {
        return Err(DomainError::duplicate("player", number));
    }
    Ok(())
}

/// Update variant of [`ensure_unique_identification`].
pub async fn ensure_unique_identification_for_update<R>(
    repo: &R,
    number: &str,
    excluded_id: i64,
) -> DomainResult<()>
where
    R: UniqueIdentityIndex + ?Sized,
{
    if repo
        .exists_by_identification_number_and_id_not(number, excluded_id)
        .await?
    {
        return Err(DomainError::duplicate("player", number));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeNameIndex {
        rows: Vec<(i64, &'static str)>,
    }

    #[async_trait]
    impl UniqueNameIndex for FakeNameIndex {
        async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
            Ok(self.rows.iter().any(|(_, n)| *n == name))
        }

        async fn exists_by_name_and_id_not(
            &self,
            name: &str,
            excluded_id: i64,
        ) -> DomainResult<bool> {
            Ok(self
                .rows
                .iter()
                .any(|(id, n)| *n == name && *id != excluded_id))
        }
    }

    fn index() -> FakeNameIndex {
        FakeNameIndex {
            rows: vec![(1, "Cup A"), (2, "Cup B")],
        }
    }

    #[tokio::test]
    async fn taken_name_is_rejected() {
        let result = ensure_unique_name(&index(), "tournament", "Cup A").await;
        assert!(matches!(
            result,
            Err(DomainError::DuplicateEntity { entity: "tournament", .. })
        ));
    }

    #[tokio::test]
    async fn fresh_name_passes() {
        assert!(ensure_unique_name(&index(), "tournament", "Cup C")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn update_keeping_own_name_passes() {
        assert!(
            ensure_unique_name_for_update(&index(), "tournament", "Cup A", 1)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn update_taking_another_records_name_is_rejected() {
        assert!(
            ensure_unique_name_for_update(&index(), "tournament", "Cup A", 2)
                .await
                .is_err()
        );
    }
}
