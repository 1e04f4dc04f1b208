//! Mutating commands against the active store.
//!
//! Commands validate their input, make exactly one driver call and report
//! the outcome verbatim. They never retry and never merge: an update
//! persists the post it is given, so partial-update merging happens before
//! the command is built (see [`tinkersnest_core::merge_update`]).

use async_trait::async_trait;
use tinkersnest_core::{now_millis, validate_post, Post};
use tinkersnest_store::Store;

use crate::error::Result;

/// A mutating request.
#[async_trait]
pub trait Command: Send + Sized {
    /// Value returned on success.
    type Output: Send;

    /// Short name used in logs.
    fn label(&self) -> &'static str;

    /// Run the command against `store`.
    async fn execute(self, store: &dyn Store) -> Result<Self::Output>;
}

/// Store a post, either as a new post or over an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePost {
    /// `true` creates, `false` updates.
    pub new: bool,
    pub post: Post,
}

impl StorePost {
    /// Create `post`. Fails with `AlreadyExists` if the name is taken.
    pub fn create(post: Post) -> Self {
        Self { new: true, post }
    }

    /// Overwrite the stored post with `post`. Fails with `NotFound` if absent.
    pub fn update(post: Post) -> Self {
        Self { new: false, post }
    }
}

#[async_trait]
impl Command for StorePost {
    type Output = Post;

    fn label(&self) -> &'static str {
        if self.new {
            "CreatePost"
        } else {
            "UpdatePost"
        }
    }

    async fn execute(self, store: &dyn Store) -> Result<Post> {
        let mut post = self.post;
        validate_post(&post)?;

        if self.new {
            if !post.has_created() {
                post.created = now_millis();
            }

            let created = store.create(&post).await?;
            tracing::info!(post.name = %created.name, "blog post created");
            Ok(created)
        } else {
            let updated = store.update(&post).await?;
            tracing::info!(post.name = %updated.name, "blog post updated");
            Ok(updated)
        }
    }
}

/// Remove a post by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePost {
    pub name: String,
}

impl DeletePost {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Command for DeletePost {
    type Output = ();

    fn label(&self) -> &'static str {
        "DeletePost"
    }

    async fn execute(self, store: &dyn Store) -> Result<()> {
        store.delete(&self.name).await?;
        tracing::info!(post.name = %self.name, "blog post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;
    use tinkersnest_core::{Content, ValidationError};
    use tinkersnest_store::MemoryStore;

    fn make_test_post(name: &str) -> Post {
        Post::builder(name)
            .title("A")
            .created(1000)
            .text("c1")
            .build()
    }

    #[tokio::test]
    async fn test_create_stamps_missing_created() {
        let store = MemoryStore::new();
        let mut post = make_test_post("fresh");
        post.created = 0;

        let created = StorePost::create(post).execute(&store).await.unwrap();
        assert!(created.created > 0);
        assert_eq!(store.find_by_name("fresh").await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_keeps_given_created() {
        let store = MemoryStore::new();
        let created = StorePost::create(make_test_post("dated"))
            .execute(&store)
            .await
            .unwrap();
        assert_eq!(created.created, 1000);
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let store = MemoryStore::new();
        StorePost::create(make_test_post("dup"))
            .execute(&store)
            .await
            .unwrap();

        let err = StorePost::create(make_test_post("dup"))
            .execute(&store)
            .await
            .unwrap_err();
        assert!(matches!(err, BlogError::AlreadyExists(ref n) if n == "dup"));
    }

    #[tokio::test]
    async fn test_invalid_post_never_reaches_store() {
        let store = MemoryStore::new();
        let mut post = make_test_post("bad");
        post.content = vec![Content::new("text", Vec::new())];

        let err = StorePost::create(post).execute(&store).await.unwrap_err();
        assert!(matches!(
            err,
            BlogError::Validation(ValidationError::EmptyContentData(0))
        ));
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_update_persists_given_value() {
        let store = MemoryStore::new();
        StorePost::create(make_test_post("p"))
            .execute(&store)
            .await
            .unwrap();

        let mut replacement = make_test_post("p");
        replacement.title = "B".into();
        replacement.publish = true;
        let updated = StorePost::update(replacement.clone())
            .execute(&store)
            .await
            .unwrap();

        assert_eq!(updated, replacement);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = MemoryStore::new();
        let err = StorePost::update(make_test_post("ghost"))
            .execute(&store)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        StorePost::create(make_test_post("p"))
            .execute(&store)
            .await
            .unwrap();

        DeletePost::new("p").execute(&store).await.unwrap();
        assert!(store.find_by_name("p").await.unwrap_err().is_not_found());

        let err = DeletePost::new("p").execute(&store).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_labels() {
        assert_eq!(StorePost::create(make_test_post("a")).label(), "CreatePost");
        assert_eq!(StorePost::update(make_test_post("a")).label(), "UpdatePost");
        assert_eq!(DeletePost::new("a").label(), "DeletePost");
    }
}
