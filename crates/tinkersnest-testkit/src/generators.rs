//! Proptest generators for property-based testing.
//!
//! Every generated post satisfies `validate_post`.

use proptest::prelude::*;

use tinkersnest_core::{Content, Post};

/// Generate a non-empty post name, spaces and slashes included.
pub fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 /-]{0,31}".prop_map(String::from)
}

/// Generate a non-empty title.
pub fn title() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ,.!?]{0,63}".prop_map(String::from)
}

/// Generate an author handle.
pub fn author() -> impl Strategy<Value = String> {
    "[a-z]{3,8}".prop_map(String::from)
}

/// Generate a creation timestamp (Unix ms).
pub fn created() -> impl Strategy<Value = i64> {
    1i64..=1_800_000_000_000i64
}

/// Generate a content type tag.
pub fn content_kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("text".to_string()),
        Just("image".to_string()),
        Just("code".to_string()),
        "[a-z]{1,12}".prop_map(String::from),
    ]
}

/// Generate a content block with a non-empty payload.
pub fn content() -> impl Strategy<Value = Content> {
    (content_kind(), prop::collection::vec(any::<u8>(), 1..=512))
        .prop_map(|(kind, data)| Content::new(kind, data))
}

/// Generate a valid post.
pub fn post() -> impl Strategy<Value = Post> {
    (
        name(),
        title(),
        created(),
        any::<bool>(),
        prop::collection::vec(content(), 1..=6),
        prop::option::of(author()),
    )
        .prop_map(|(name, title, created, publish, content, author)| Post {
            name,
            title,
            created,
            publish,
            content,
            author,
        })
}

/// Generate up to `max` valid posts with distinct names.
pub fn unique_posts(max: usize) -> impl Strategy<Value = Vec<Post>> {
    prop::collection::btree_map(name(), post(), 0..=max).prop_map(|posts| {
        posts
            .into_iter()
            .map(|(name, mut post)| {
                post.name = name;
                post
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tinkersnest_core::validate_post;

    proptest! {
        #[test]
        fn test_generated_posts_are_valid(post in post()) {
            prop_assert!(validate_post(&post).is_ok());
        }

        #[test]
        fn test_unique_posts_have_distinct_names(posts in unique_posts(16)) {
            let names: HashSet<&str> = posts.iter().map(|p| p.name.as_str()).collect();
            prop_assert_eq!(names.len(), posts.len());
        }
    }
}
