//! # Database Error Types
//!
//! Error types for cart persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  sqlx::Error ──────────┐                                               │
//! │  serde_json::Error ────┼──► DbError ──► caller (HTTP handler, etc.)    │
//! │  CoreError ────────────┤                                               │
//! │  ValidationError ──────┘                                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::{CoreError, ValidationError};
use thiserror::Error;

/// Everything that can go wrong between a cart and its row.
#[derive(Debug, Error)]
pub enum DbError {
    /// The store could not be opened, or was already closed.
    #[error("Cart store unavailable: {0}")]
    ConnectionFailed(String),

    #[error("Schema migration failed: {0}")]
    MigrationFailed(String),

    /// SQLite rejected a statement (constraint, syntax, locked file).
    #[error("Cart query rejected: {0}")]
    QueryFailed(String),

    /// Every pooled connection stayed busy past the acquire timeout.
    #[error("No cart store connection available")]
    PoolExhausted,

    /// A stored cart could not be encoded or decoded.
    #[error("Cart serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored cart violates cart rules.
    #[error("Stored cart is invalid: {0}")]
    Core(#[from] CoreError),

    /// Caller input rejected before touching the database.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cart store error: {0}")]
    Internal(String),
}

/// ```text
/// Database(..)   → QueryFailed
/// PoolTimedOut   → PoolExhausted
/// PoolClosed     → ConnectionFailed
/// anything else  → Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(e) => DbError::QueryFailed(e.message().to_owned()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("store is closed".to_owned()),
            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::Internal(_)
        ));
    }

    #[test]
    fn test_closed_store_message() {
        assert_eq!(
            DbError::from(sqlx::Error::PoolClosed).to_string(),
            "Cart store unavailable: store is closed"
        );
    }

    #[test]
    fn test_validation_error_message() {
        let err: DbError = ValidationError::Required {
            field: "user_id".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid input: user_id is required");
    }
}
