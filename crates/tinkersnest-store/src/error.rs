//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// `NotFound` and `AlreadyExists` are domain outcomes. Every other variant is
/// a backend fault.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No post with this name.
    #[error("post not found: {0}")]
    NotFound(String),

    /// A post with this name is already stored.
    #[error("post already exists: {0}")]
    AlreadyExists(String),

    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Document serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// A lock guarding store state was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),

    /// The blocking task running a database call failed.
    #[error("storage task failed: {0}")]
    Task(String),
}

impl StoreError {
    /// Check if this is the `NotFound` outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Check if this is the `AlreadyExists` outcome.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AlreadyExists(_))
    }

    /// Check if this is a backend fault rather than a domain outcome.
    pub fn is_fault(&self) -> bool {
        !self.is_not_found() && !self.is_already_exists()
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_are_not_faults() {
        assert!(StoreError::NotFound("a".into()).is_not_found());
        assert!(!StoreError::NotFound("a".into()).is_fault());
        assert!(StoreError::AlreadyExists("a".into()).is_already_exists());
        assert!(!StoreError::AlreadyExists("a".into()).is_fault());
    }

    #[test]
    fn test_backend_errors_are_faults() {
        let err = StoreError::Serialization("bad cbor".into());
        assert!(err.is_fault());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "serialization error: bad cbor");
    }

    #[test]
    fn test_every_fault_variant() {
        let faults = [
            StoreError::Database(rusqlite::Error::InvalidQuery),
            StoreError::Serialization("x".into()),
            StoreError::Migration("x".into()),
            StoreError::LockPoisoned("x".into()),
            StoreError::Task("x".into()),
        ];
        for fault in faults {
            assert!(fault.is_fault(), "{:?}", fault);
        }
    }
}
