//! Partial-update merging.
//!
//! An update request carries a whole post, but empty fields mean "leave
//! unchanged". The one exception is `publish`: a boolean has no empty value,
//! so the incoming flag always wins, even when it is `false`.

use crate::post::Post;

/// Merge an incoming update into the stored post.
///
/// - `publish` is always taken from `incoming`.
/// - `title` is replaced only if `incoming.title` is non-empty.
/// - `content` is replaced only if `incoming.content` is non-empty.
/// - `name`, `created` and `author` are kept from `stored`.
///
/// The result is what the caller hands to `StorePost { new: false }`. There is
/// no version check between the read that produced `stored` and the write of
/// the result, so two merges from the same read will race and the later write
/// replaces the earlier one.
pub fn merge_update(mut stored: Post, incoming: &Post) -> Post {
    stored.publish = incoming.publish;

    if !incoming.title.is_empty() {
        stored.title = incoming.title.clone();
    }

    if !incoming.content.is_empty() {
        stored.content = incoming.content.clone();
    }

    stored
}
