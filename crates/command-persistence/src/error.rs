//! Persistence error types.

use thiserror::Error;

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Errors raised by the command store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The requested row does not exist.
    #[error("{kind} with id {id} not found")]
    NotFound { kind: String, id: i64 },

    /// The database URL could not be parsed.
    #[error("invalid database url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    /// A query, connection or transaction failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Applying the embedded schema migrations failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl PersistenceError {
    /// Creates a not-found error for a command id.
    pub fn command_not_found(id: i64) -> Self {
        PersistenceError::NotFound {
            kind: "command".to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = PersistenceError::command_not_found(9);
        assert_eq!(err.to_string(), "command with id 9 not found");
        assert!(matches!(err, PersistenceError::NotFound { id: 9, .. }));
    }

    #[test]
    fn test_database_error_is_not_not_found() {
        let err = PersistenceError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, PersistenceError::Database(_)));
        assert!(err.to_string().starts_with("database error"));
    }
}
