//! Post: the unit of content published on the blog.
//!
//! A post is identified by its `name`, which is chosen by the creator and
//! never changes. Its body is an ordered list of typed content blocks.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Content type tag for plain text blocks.
pub const CONTENT_TEXT: &str = "text";

/// Content type tag for image blocks.
pub const CONTENT_IMAGE: &str = "image";

/// A single typed block of post content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Content {
    /// Renderer tag, e.g. `"text"` or `"image"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Raw payload bytes. Opaque to storage.
    pub data: Bytes,
}

impl Content {
    /// Create a content block with the given type tag and payload.
    pub fn new(kind: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            kind: kind.into(),
            data: data.into(),
        }
    }

    /// Create a `"text"` block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(CONTENT_TEXT, Bytes::from(text.into()))
    }

    /// Create an `"image"` block.
    pub fn image(data: impl Into<Bytes>) -> Self {
        Self::new(CONTENT_IMAGE, data)
    }

    /// Check if the block carries any payload.
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, assigned by the creator. Immutable.
    pub name: String,

    /// Display title. Required once the post is published.
    #[serde(default)]
    pub title: String,

    /// Creation time (Unix milliseconds). Write-once.
    #[serde(default)]
    pub created: i64,

    /// Whether the post is externally visible.
    #[serde(default)]
    pub publish: bool,

    /// Content blocks in render order.
    #[serde(default)]
    pub content: Vec<Content>,

    /// Optional author, used as a search filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Post {
    /// Create an unpublished post with no content.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            created: 0,
            publish: false,
            content: Vec::new(),
            author: None,
        }
    }

    /// Start building a post.
    pub fn builder(name: impl Into<String>) -> PostBuilder {
        PostBuilder::new(name)
    }

    /// Check if the post was written by `author`.
    pub fn is_by(&self, author: &str) -> bool {
        self.author.as_deref() == Some(author)
    }

    /// Check if `created` has been assigned.
    pub fn has_created(&self) -> bool {
        self.created != 0
    }
}

/// Builder for posts.
#[derive(Debug, Clone)]
pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    /// Create a builder for a post with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            post: Post::new(name, ""),
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.post.title = title.into();
        self
    }

    /// Set the creation timestamp (Unix ms).
    pub fn created(mut self, created: i64) -> Self {
        self.post.created = created;
        self
    }

    /// Set the publish flag.
    pub fn publish(mut self, publish: bool) -> Self {
        self.post.publish = publish;
        self
    }

    /// Append a content block.
    pub fn content(mut self, content: Content) -> Self {
        self.post.content.push(content);
        self
    }

    /// Append a text block.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.content(Content::text(text))
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.post.author = Some(author.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> Post {
        self.post
    }
}

/// Get current time in milliseconds.
pub fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let post = Post::builder("hello-world")
            .title("Hello")
            .created(1_736_870_400_000)
            .publish(true)
            .text("first")
            .content(Content::image(vec![0x89, 0x50]))
            .author("alice")
            .build();

        assert_eq!(post.name, "hello-world");
        assert_eq!(post.content.len(), 2);
        assert_eq!(post.content[0].kind, CONTENT_TEXT);
        assert_eq!(post.content[1].kind, CONTENT_IMAGE);
        assert!(post.is_by("alice"));
        assert!(!post.is_by("bob"));
    }

    #[test]
    fn test_json_field_names() {
        let post = Post::builder("p").title("T").created(7).text("x").build();
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["name"], "p");
        assert_eq!(value["created"], 7);
        assert_eq!(value["publish"], false);
        assert_eq!(value["content"][0]["type"], "text");
        assert!(value.get("author").is_none());
    }

    #[test]
    fn test_json_missing_fields_default() {
        let post: Post = serde_json::from_str(r#"{"name":"draft","publish":true}"#).unwrap();

        assert_eq!(post.title, "");
        assert_eq!(post.created, 0);
        assert!(post.publish);
        assert!(post.content.is_empty());
        assert_eq!(post.author, None);
    }

    #[test]
    fn test_now_millis_is_positive() {
        assert!(now_millis() > 0);
    }
}
