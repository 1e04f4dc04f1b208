//! Read-only queries against the active store.

use async_trait::async_trait;
use tinkersnest_core::Post;
use tinkersnest_store::{SearchFilter, Store};

use crate::error::Result;

/// A read-only request. Executing a query never mutates storage.
#[async_trait]
pub trait Query: Send + Sized {
    /// Value returned on success.
    type Output: Send;

    /// Short name used in logs.
    fn label(&self) -> &'static str;

    /// Run the query against `store`.
    async fn execute(self, store: &dyn Store) -> Result<Self::Output>;
}

/// Look up one post by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPost {
    pub name: String,
}

impl FindPost {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Query for FindPost {
    type Output = Post;

    fn label(&self) -> &'static str {
        "FindPost"
    }

    async fn execute(self, store: &dyn Store) -> Result<Post> {
        Ok(store.find_by_name(&self.name).await?)
    }
}

/// List posts, optionally restricted to one author.
///
/// Results are newest first. No match is an empty list, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPosts {
    pub author: Option<String>,
}

impl SearchPosts {
    /// Search every post.
    pub fn all() -> Self {
        Self::default()
    }

    /// Search posts by `author`.
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
        }
    }
}

#[async_trait]
impl Query for SearchPosts {
    type Output = Vec<Post>;

    fn label(&self) -> &'static str {
        "SearchPosts"
    }

    async fn execute(self, store: &dyn Store) -> Result<Vec<Post>> {
        let filter = SearchFilter {
            author: self.author,
        };
        Ok(store.search(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;
    use tinkersnest_store::MemoryStore;

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        for (name, created, author) in [("a", 1, "alice"), ("b", 3, "bob"), ("c", 2, "alice")] {
            let post = Post::builder(name)
                .created(created)
                .author(author)
                .text("body")
                .build();
            store.create(&post).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_find_post() {
        let store = seeded_store().await;

        let post = FindPost::new("b").execute(&store).await.unwrap();
        assert_eq!(post.name, "b");

        let err = FindPost::new("zzz").execute(&store).await.unwrap_err();
        assert!(matches!(err, BlogError::NotFound(ref n) if n == "zzz"));
    }

    #[tokio::test]
    async fn test_search_posts() {
        let store = seeded_store().await;

        let all = SearchPosts::all().execute(&store).await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);

        let alice = SearchPosts::by_author("alice").execute(&store).await.unwrap();
        assert!(alice.iter().all(|p| p.is_by("alice")));
        assert_eq!(alice.len(), 2);

        let none = SearchPosts::by_author("carol").execute(&store).await.unwrap();
        assert!(none.is_empty());
    }
}
