//! In-memory implementation of the Store trait.
//!
//! This is primarily for testing and local development. It has the same
//! semantics as SQLite but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tinkersnest_core::Post;

use crate::error::{Result, StoreError};
use crate::traits::{newest_first, SearchFilter, Store};

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via a single
/// RwLock held for the whole of each operation.
pub struct MemoryStore {
    posts: RwLock<HashMap<String, Post>>,
}

impl MemoryStore {
    /// Registered driver name.
    pub const DRIVER_NAME: &'static str = "inmemory";

    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored posts.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Check if the store holds no posts.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Post>>> {
        self.posts
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Post>>> {
        self.posts
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn driver_name(&self) -> &'static str {
        Self::DRIVER_NAME
    }

    async fn create(&self, post: &Post) -> Result<Post> {
        let mut posts = self.write()?;

        if posts.contains_key(&post.name) {
            return Err(StoreError::AlreadyExists(post.name.clone()));
        }

        posts.insert(post.name.clone(), post.clone());
        tracing::debug!(name = %post.name, "created post in memory");

        Ok(post.clone())
    }

    async fn update(&self, post: &Post) -> Result<Post> {
        let mut posts = self.write()?;

        let stored = posts
            .get_mut(&post.name)
            .ok_or_else(|| StoreError::NotFound(post.name.clone()))?;

        // created is write-once
        let created = stored.created;
        *stored = post.clone();
        stored.created = created;
        tracing::debug!(name = %post.name, "updated post in memory");

        Ok(stored.clone())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let mut posts = self.write()?;

        match posts.remove(name) {
            Some(_) => {
                tracing::debug!(name, "deleted post from memory");
                Ok(())
            }
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Post> {
        let posts = self.read()?;
        posts
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Post>> {
        let mut matched: Vec<Post> = {
            let posts = self.read()?;
            posts
                .values()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect()
        };

        matched.sort_by(newest_first);
        Ok(matched)
    }
}
