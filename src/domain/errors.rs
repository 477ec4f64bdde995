use thiserror::Error;

/// Errors raised by the domain and use-case layers.
///
/// The web adapter translates these into HTTP status codes
/// (400 / 409 / 404 / 500); the core never retries and never
/// recovers partially — any error aborts the current operation.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field is blank or outside its allowed range.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A uniqueness invariant (name, identification number) was violated.
    #[error("duplicate {entity}: {value}")]
    DuplicateEntity { entity: &'static str, value: String },

    /// An id lookup missed during an update or delete.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The backing store failed or returned corrupt data.
    #[error("repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn duplicate(entity: &'static str, value: impl Into<String>) -> Self {
        Self::DuplicateEntity {
            entity,
            value: value.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_error_message_names_entity_and_value() {
        let err = DomainError::duplicate("tournament", "Cup A");
        assert_eq!(err.to_string(), "duplicate tournament: Cup A");
    }

    #[test]
    fn not_found_error_message_names_entity_and_id() {
        let err = DomainError::not_found("team", 42);
        assert_eq!(err.to_string(), "team not found: 42");
    }
}
