//! Database error types

use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Foreign key constraint violation
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Transaction error
    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    /// Migration error
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// A stored value could not be mapped back to its domain type
    #[error("corrupt row: {0}")]
    CorruptRow(String),

    /// Pool exhaustion, no available connections
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("sql error: {0}")]
    SqlError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Not-found error for an entity type and identifier
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{entity} with id '{id}' not found"))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_)
                | DatabaseError::ForeignKeyViolation(_)
                | DatabaseError::ConstraintViolation(_)
        )
    }
}

/// Maps PostgreSQL error codes onto the specific variants
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                match db_err.code().as_deref() {
                    Some("23505") => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                    Some("23503") => {
                        DatabaseError::ForeignKeyViolation(db_err.message().to_string())
                    }
                    Some("23514") => {
                        DatabaseError::ConstraintViolation(db_err.message().to_string())
                    }
                    _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mentions_entity() {
        let err = DatabaseError::not_found("Customer", "CUST-123");
        assert!(err.to_string().contains("Customer"));
        assert!(err.is_not_found());
    }
}
