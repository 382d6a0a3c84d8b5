//! Domain-level error types.

use thiserror::Error;

use crate::query::PageError;

/// Domain errors - business rule and lookup failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        DomainError::NotFound { entity, id }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        DomainError::Validation(vec![message.into()])
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_joined() {
        let err = DomainError::Validation(vec!["Title is required".into(), "Slug is required".into()]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Title is required; Slug is required"
        );
    }

    #[test]
    fn repository_errors_convert() {
        let err: DomainError = RepoError::Constraint("slug".into()).into();
        assert!(matches!(err, DomainError::Repository(RepoError::Constraint(_))));
    }
}
