//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use tinkersnest::Dispatcher;
use tinkersnest_core::{Content, Post};
use tinkersnest_store::{MemoryStore, SqliteStore, Store};

/// Fixed creation time used by fixtures (2025-01-14T16:00:00Z).
pub const FIXTURE_CREATED: i64 = 1_736_870_400_000;

/// A valid, unpublished post with one text block.
pub fn sample_post(name: &str) -> Post {
    Post::builder(name)
        .title(format!("Post {}", name))
        .created(FIXTURE_CREATED)
        .text(format!("body of {}", name))
        .build()
}

/// A valid post with an explicit creation time and author.
pub fn authored_post(name: &str, author: &str, created: i64) -> Post {
    Post::builder(name)
        .title(format!("Post {}", name))
        .created(created)
        .publish(true)
        .text(format!("body of {}", name))
        .content(Content::image(vec![0x89, b'P', b'N', b'G']))
        .author(author)
        .build()
}

/// An update request that only flips the publish flag.
pub fn publish_patch(name: &str, publish: bool) -> Post {
    Post::builder(name).publish(publish).build()
}

/// A fresh instance of every built-in driver.
pub fn all_stores() -> Vec<Arc<dyn Store>> {
    let memory: Arc<dyn Store> = Arc::new(MemoryStore::new());
    let sqlite: Arc<dyn Store> =
        Arc::new(SqliteStore::open_memory().expect("opening in-memory sqlite"));
    vec![memory, sqlite]
}

/// A dispatcher over each built-in driver.
pub fn all_dispatchers() -> Vec<Dispatcher> {
    all_stores().into_iter().map(Dispatcher::new).collect()
}
