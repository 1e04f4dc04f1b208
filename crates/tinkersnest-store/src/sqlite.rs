//! SQLite implementation of the Store trait.
//!
//! This is the durable storage backend. Each post is kept as one document:
//! a CBOR body keyed by the post name, with `created` and `author` projected
//! into indexed columns so search can filter and order without decoding.
//!
//! rusqlite is synchronous, so every call runs on `tokio::task::spawn_blocking`.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use tinkersnest_core::{now_millis, Content, Post};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::{SearchFilter, Store};

/// SQLite-based store implementation.
///
/// Thread-safe via an internal Mutex around the single connection. Each
/// mutation is one statement or one transaction, so a failed write leaves
/// nothing behind. Calls on one instance are serialized by that Mutex; the
/// wait happens on a blocking thread, never on the async runtime.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

/// The stored body of a post. `name` and `created` live in their own columns.
#[derive(Debug, Serialize, Deserialize)]
struct PostDocument {
    title: String,
    publish: bool,
    content: Vec<Content>,
    author: Option<String>,
}

impl SqliteStore {
    /// Registered driver name.
    pub const DRIVER_NAME: &'static str = "sqlite";

    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        tracing::debug!(path = %path.display(), "opened sqlite store");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a blocking operation on the connection off the async runtime.
    async fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let mut conn = conn
                .lock()
                .map_err(|e| StoreError::LockPoisoned(format!("sqlite connection: {}", e)))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| StoreError::Task(format!("spawn_blocking failed: {}", e)))?
    }
}

// Helper to encode the document body to CBOR
fn encode_document(post: &Post) -> Result<Vec<u8>> {
    let doc = PostDocument {
        title: post.title.clone(),
        publish: post.publish,
        content: post.content.clone(),
        author: post.author.clone(),
    };

    let mut buf = Vec::new();
    ciborium::into_writer(&doc, &mut buf)
        .map_err(|e| StoreError::Serialization(format!("encoding post {}: {}", post.name, e)))?;
    Ok(buf)
}

// Helper to rebuild a post from its columns and document body
fn decode_post(name: String, created: i64, document: &[u8]) -> Result<Post> {
    let doc: PostDocument = ciborium::from_reader(document)
        .map_err(|e| StoreError::Serialization(format!("decoding post {}: {}", name, e)))?;

    Ok(Post {
        name,
        title: doc.title,
        created,
        publish: doc.publish,
        content: doc.content,
        author: doc.author,
    })
}

fn is_duplicate_key(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

#[async_trait]
impl Store for SqliteStore {
    fn driver_name(&self) -> &'static str {
        Self::DRIVER_NAME
    }

    async fn create(&self, post: &Post) -> Result<Post> {
        let post = post.clone();
        let document = encode_document(&post)?;

        self.with_conn(move |conn| {
            let inserted = conn.execute(
                "INSERT INTO posts (name, created, author, document, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![post.name, post.created, post.author, document, now_millis()],
            );

            match inserted {
                Ok(_) => {
                    tracing::debug!(name = %post.name, "created post document");
                    Ok(post)
                }
                Err(e) if is_duplicate_key(&e) => Err(StoreError::AlreadyExists(post.name)),
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn update(&self, post: &Post) -> Result<Post> {
        let mut post = post.clone();
        let document = encode_document(&post)?;

        self.with_conn(move |conn| {
            let tx = conn.transaction()?;

            let created: Option<i64> = tx
                .query_row(
                    "SELECT created FROM posts WHERE name = ?1",
                    params![post.name],
                    |row| row.get(0),
                )
                .optional()?;

            let Some(created) = created else {
                return Err(StoreError::NotFound(post.name));
            };

            tx.execute(
                "UPDATE posts SET author = ?1, document = ?2, updated_at = ?3 WHERE name = ?4",
                params![post.author, document, now_millis(), post.name],
            )?;
            tx.commit()?;

            // created is write-once
            post.created = created;
            tracing::debug!(name = %post.name, "updated post document");
            Ok(post)
        })
        .await
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let name = name.to_string();

        self.with_conn(move |conn| {
            let removed = conn.execute("DELETE FROM posts WHERE name = ?1", params![name])?;
            if removed == 0 {
                return Err(StoreError::NotFound(name));
            }

            tracing::debug!(name = %name, "deleted post document");
            Ok(())
        })
        .await
    }

    async fn find_by_name(&self, name: &str) -> Result<Post> {
        let name = name.to_string();

        self.with_conn(move |conn| {
            let row: Option<(i64, Vec<u8>)> = conn
                .query_row(
                    "SELECT created, document FROM posts WHERE name = ?1",
                    params![name],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            match row {
                Some((created, document)) => decode_post(name, created, &document),
                None => Err(StoreError::NotFound(name)),
            }
        })
        .await
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Post>> {
        let author = filter.author.clone();

        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT name, created, document FROM posts
                 WHERE ?1 IS NULL OR author = ?1
                 ORDER BY created DESC, name ASC",
            )?;

            let rows = stmt
                .query_map(params![author], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, Vec<u8>>(2)?,
                    ))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            rows.into_iter()
                .map(|(name, created, document)| decode_post(name, created, &document))
                .collect::<Result<Vec<_>>>()
        })
        .await
    }
}
