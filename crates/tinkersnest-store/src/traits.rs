//! Store trait: the contract every storage driver satisfies.
//!
//! This trait lets the handlers stay storage-agnostic. Implementations
//! include SQLite (durable) and in-memory (for tests and development).

use std::cmp::Ordering;

use async_trait::async_trait;
use tinkersnest_core::Post;

use crate::error::Result;

/// Constraints applied by [`Store::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Only return posts by this author. `None` returns every post.
    pub author: Option<String>,
}

impl SearchFilter {
    /// A filter that matches every post.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter that matches posts by `author`.
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
        }
    }

    /// Check if a post satisfies the filter.
    pub fn matches(&self, post: &Post) -> bool {
        match &self.author {
            Some(author) => post.is_by(author),
            None => true,
        }
    }
}

/// Search result ordering: newest first, ties broken by name ascending.
pub fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.created
        .cmp(&a.created)
        .then_with(|| a.name.cmp(&b.name))
}

/// The Store trait: async interface for post persistence.
///
/// All methods are async so that blocking backends (SQLite) can move their
/// work off the runtime.
///
/// # Design Notes
///
/// - **Identity**: `name` is the only key. `create` never overwrites.
/// - **Write-once `created`**: `update` keeps the stored timestamp and
///   returns the value actually persisted.
/// - **Outcomes vs faults**: missing and duplicate names are reported as
///   `StoreError::NotFound` / `StoreError::AlreadyExists`; every other error
///   is a backend fault.
/// - **No retries**: each call is a single attempt.
#[async_trait]
pub trait Store: Send + Sync {
    /// Registered identifier of this driver (e.g. `"inmemory"`).
    fn driver_name(&self) -> &'static str;

    /// Persist a new post.
    ///
    /// Fails with `AlreadyExists` if a post with the same name is stored.
    async fn create(&self, post: &Post) -> Result<Post>;

    /// Overwrite an existing post.
    ///
    /// Fails with `NotFound` if no post with that name is stored.
    async fn update(&self, post: &Post) -> Result<Post>;

    /// Remove a post. Fails with `NotFound` if absent.
    async fn delete(&self, name: &str) -> Result<()>;

    /// Get a post by name. Fails with `NotFound` if absent.
    async fn find_by_name(&self, name: &str) -> Result<Post>;

    /// List posts matching `filter`, ordered by [`newest_first`].
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Post>>;
}
