//! Error types for Tinkersnest.

use thiserror::Error;
use tinkersnest_core::ValidationError;
use tinkersnest_store::StoreError;

use crate::config::ConfigError;

/// Errors returned by query and command handlers.
///
/// `NotFound` and `AlreadyExists` are kept apart from `Storage` so callers
/// can pick a status code or message without inspecting the backend error.
#[derive(Debug, Error)]
pub enum BlogError {
    /// No post with this name.
    #[error("post not found: {0}")]
    NotFound(String),

    /// A post with this name already exists.
    #[error("post already exists: {0}")]
    AlreadyExists(String),

    /// The post failed validation before reaching storage.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Backend fault.
    #[error("storage error: {0}")]
    Storage(StoreError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<StoreError> for BlogError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(name) => BlogError::NotFound(name),
            StoreError::AlreadyExists(name) => BlogError::AlreadyExists(name),
            other => BlogError::Storage(other),
        }
    }
}

impl BlogError {
    /// Check if this is the `NotFound` outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlogError::NotFound(_))
    }

    /// Check if this is the `AlreadyExists` outcome.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, BlogError::AlreadyExists(_))
    }
}

/// Result type for Tinkersnest operations.
pub type Result<T> = std::result::Result<T, BlogError>;
