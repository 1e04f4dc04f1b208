//! The Dispatcher: routes queries and commands to the one active store.
//!
//! A process builds exactly one store at startup (see [`open_store`]) and
//! hands it to a [`Dispatcher`]. Clones of the dispatcher share that store;
//! there is no global registry.

use std::sync::Arc;

use tinkersnest_core::{merge_update, Post};
use tinkersnest_store::{MemoryStore, SqliteStore, Store};

use crate::commands::{Command, DeletePost, StorePost};
use crate::config::{Config, StorageConfig};
use crate::error::{BlogError, Result};
use crate::queries::{FindPost, Query, SearchPosts};

/// Construct the driver named by `config`.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn Store>> {
    let store: Arc<dyn Store> = match config {
        StorageConfig::InMemory => Arc::new(MemoryStore::new()),
        StorageConfig::Sqlite { path } => Arc::new(SqliteStore::open(path)?),
    };

    tracing::info!(driver = store.driver_name(), "storage driver selected");
    Ok(store)
}

/// Routes queries and commands to the active store.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn Store>,
}

impl Dispatcher {
    /// Create a dispatcher over an already constructed store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Open the configured store and wrap it.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(open_store(&config.storage)?))
    }

    /// Registered name of the active driver.
    pub fn driver_name(&self) -> &'static str {
        self.store.driver_name()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Run a query.
    pub async fn query<Q: Query>(&self, query: Q) -> Result<Q::Output> {
        let label = query.label();
        tracing::trace!(query = label, "dispatching query");

        let result = query.execute(self.store.as_ref()).await;
        log_fault(label, &result);
        result
    }

    /// Run a command.
    pub async fn execute<C: Command>(&self, command: C) -> Result<C::Output> {
        let label = command.label();
        tracing::trace!(command = label, "dispatching command");

        let result = command.execute(self.store.as_ref()).await;
        log_fault(label, &result);
        result
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Post Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Get a post by name.
    pub async fn find_post(&self, name: &str) -> Result<Post> {
        self.query(FindPost::new(name)).await
    }

    /// List posts, newest first, optionally by one author.
    pub async fn search_posts(&self, author: Option<&str>) -> Result<Vec<Post>> {
        self.query(SearchPosts {
            author: author.map(String::from),
        })
        .await
    }

    /// Create a new post.
    pub async fn create_post(&self, post: Post) -> Result<Post> {
        self.execute(StorePost::create(post)).await
    }

    /// Apply a partial update to the post called `name`.
    ///
    /// Reads the stored post, merges `incoming` into it with
    /// [`merge_update`], and writes the result back. The read and the write
    /// are separate calls with no version check: if another update lands in
    /// between, this write replaces it.
    pub async fn update_post(&self, name: &str, incoming: &Post) -> Result<Post> {
        let stored = self.find_post(name).await?;
        let merged = merge_update(stored, incoming);
        self.execute(StorePost::update(merged)).await
    }

    /// Delete a post by name.
    pub async fn delete_post(&self, name: &str) -> Result<()> {
        self.execute(DeletePost::new(name)).await
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("driver", &self.driver_name())
            .finish()
    }
}

fn log_fault<T>(label: &str, result: &Result<T>) {
    if let Err(e @ BlogError::Storage(_)) = result {
        tracing::warn!(operation = label, error = %e, "storage fault");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinkersnest_core::Content;

    fn dispatcher() -> Dispatcher {
        Dispatcher::from_config(&Config::in_memory()).unwrap()
    }

    fn make_test_post(name: &str, created: i64) -> Post {
        Post::builder(name)
            .title("A")
            .created(created)
            .text("c1")
            .build()
    }

    #[tokio::test]
    async fn test_from_config_inmemory() {
        let dispatcher = dispatcher();
        assert_eq!(dispatcher.driver_name(), "inmemory");
        assert!(format!("{:?}", dispatcher).contains("inmemory"));
    }

    #[tokio::test]
    async fn test_from_config_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage: StorageConfig::Sqlite {
                path: dir.path().join("blog.db"),
            },
            ..Config::in_memory()
        };

        let dispatcher = Dispatcher::from_config(&config).unwrap();
        assert_eq!(dispatcher.driver_name(), "sqlite");

        dispatcher
            .create_post(make_test_post("on-disk", 1))
            .await
            .unwrap();
        assert_eq!(dispatcher.find_post("on-disk").await.unwrap().created, 1);
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let a = dispatcher();
        let b = a.clone();

        a.create_post(make_test_post("shared", 1)).await.unwrap();
        assert!(b.find_post("shared").await.is_ok());
    }

    #[tokio::test]
    async fn test_update_post_partial() {
        let dispatcher = dispatcher();
        dispatcher
            .create_post(make_test_post("p", 1000))
            .await
            .unwrap();

        let incoming = Post::builder("p").publish(true).build();
        let updated = dispatcher.update_post("p", &incoming).await.unwrap();

        assert_eq!(updated.title, "A");
        assert_eq!(updated.content, vec![Content::text("c1")]);
        assert!(updated.publish);
        assert_eq!(updated.created, 1000);
        assert_eq!(dispatcher.find_post("p").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_post_missing() {
        let dispatcher = dispatcher();
        let incoming = Post::builder("ghost").title("T").build();

        let err = dispatcher.update_post("ghost", &incoming).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_search_posts() {
        let dispatcher = dispatcher();
        let mut by_alice = make_test_post("a", 1);
        by_alice.author = Some("alice".into());
        dispatcher.create_post(by_alice).await.unwrap();
        dispatcher.create_post(make_test_post("b", 2)).await.unwrap();

        assert_eq!(dispatcher.search_posts(None).await.unwrap().len(), 2);

        let alice = dispatcher.search_posts(Some("alice")).await.unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].name, "a");
    }
}
