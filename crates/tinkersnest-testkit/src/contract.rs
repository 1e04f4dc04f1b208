//! Driver contract checks.
//!
//! Every [`Store`] implementation must pass the same checks. Each check takes
//! an empty store and panics on the first violation, so a driver test is one
//! call to [`check_all`] with a store factory.

use std::sync::Arc;

use tinkersnest_core::{Content, Post};
use tinkersnest_store::{SearchFilter, Store};

use crate::fixtures::{authored_post, sample_post};

/// Run every contract check, each against a fresh store from `make`.
pub async fn check_all<F>(make: F)
where
    F: Fn() -> Arc<dyn Store>,
{
    check_create_then_find(make().as_ref()).await;
    check_duplicate_create(make().as_ref()).await;
    check_missing_name(make().as_ref()).await;
    check_delete_removes(make().as_ref()).await;
    check_update_overwrites(make().as_ref()).await;
    check_update_keeps_created(make().as_ref()).await;
    check_content_order_preserved(make().as_ref()).await;
    check_search_order(make().as_ref()).await;
    check_search_by_author(make().as_ref()).await;
    check_returned_values_are_copies(make().as_ref()).await;
}

/// A created post is found with an equal value.
pub async fn check_create_then_find(store: &dyn Store) {
    let post = authored_post("hello", "alice", 1000);

    let created = store.create(&post).await.unwrap();
    assert_eq!(created, post, "{}: create returns the stored value", store.driver_name());

    let found = store.find_by_name("hello").await.unwrap();
    assert_eq!(found, post, "{}: find returns the created value", store.driver_name());
}

/// Creating an existing name fails and leaves the original untouched.
pub async fn check_duplicate_create(store: &dyn Store) {
    let original = sample_post("taken");
    store.create(&original).await.unwrap();

    let mut intruder = authored_post("taken", "mallory", 2000);
    intruder.title = "overwritten".into();

    let err = store.create(&intruder).await.unwrap_err();
    assert!(err.is_already_exists(), "{}: got {:?}", store.driver_name(), err);
    assert_eq!(store.find_by_name("taken").await.unwrap(), original);
}

/// Find, update and delete on an unknown name report `NotFound`.
pub async fn check_missing_name(store: &dyn Store) {
    let driver = store.driver_name();

    let err = store.find_by_name("missing").await.unwrap_err();
    assert!(err.is_not_found(), "{}: find got {:?}", driver, err);

    let err = store.update(&sample_post("missing")).await.unwrap_err();
    assert!(err.is_not_found(), "{}: update got {:?}", driver, err);

    let err = store.delete("missing").await.unwrap_err();
    assert!(err.is_not_found(), "{}: delete got {:?}", driver, err);

    // A failed update must not create the post
    assert!(store.find_by_name("missing").await.unwrap_err().is_not_found());
}

/// A deleted post can no longer be found or deleted again.
pub async fn check_delete_removes(store: &dyn Store) {
    store.create(&sample_post("doomed")).await.unwrap();
    store.create(&sample_post("survivor")).await.unwrap();

    store.delete("doomed").await.unwrap();

    assert!(store.find_by_name("doomed").await.unwrap_err().is_not_found());
    assert!(store.delete("doomed").await.unwrap_err().is_not_found());
    assert!(store.find_by_name("survivor").await.is_ok());
}

/// Update replaces every mutable field with the given value.
pub async fn check_update_overwrites(store: &dyn Store) {
    store.create(&sample_post("edited")).await.unwrap();

    let replacement = Post::builder("edited")
        .title("Edited")
        .created(crate::fixtures::FIXTURE_CREATED)
        .publish(true)
        .text("new body")
        .author("bob")
        .build();

    let persisted = store.update(&replacement).await.unwrap();
    assert_eq!(persisted, replacement, "{}", store.driver_name());
    assert_eq!(store.find_by_name("edited").await.unwrap(), replacement);
}

/// `created` is write-once: update never changes it.
pub async fn check_update_keeps_created(store: &dyn Store) {
    store.create(&authored_post("dated", "alice", 1000)).await.unwrap();

    let mut later = authored_post("dated", "alice", 99_999);
    later.title = "retitled".into();

    let persisted = store.update(&later).await.unwrap();
    assert_eq!(persisted.created, 1000, "{}", store.driver_name());
    assert_eq!(persisted.title, "retitled");
    assert_eq!(store.find_by_name("dated").await.unwrap().created, 1000);
}

/// Content blocks come back in the order they were stored, bytes intact.
pub async fn check_content_order_preserved(store: &dyn Store) {
    let post = Post::builder("ordered")
        .title("Ordered")
        .created(1)
        .text("first")
        .content(Content::image((0u8..=255).collect::<Vec<u8>>()))
        .content(Content::new("code", b"fn main() {}".to_vec()))
        .text("last")
        .build();

    store.create(&post).await.unwrap();
    let found = store.find_by_name("ordered").await.unwrap();

    let kinds: Vec<&str> = found.content.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(kinds, vec!["text", "image", "code", "text"], "{}", store.driver_name());
    assert_eq!(found.content, post.content);
}

/// Unfiltered search returns everything, newest first, ties by name.
pub async fn check_search_order(store: &dyn Store) {
    let empty = store.search(&SearchFilter::all()).await.unwrap();
    assert!(empty.is_empty(), "{}: fresh store is empty", store.driver_name());

    for (name, created) in [("beta", 10), ("gamma", 30), ("alpha", 10), ("delta", 20)] {
        store
            .create(&authored_post(name, "alice", created))
            .await
            .unwrap();
    }

    let posts = store.search(&SearchFilter::all()).await.unwrap();
    let names: Vec<&str> = posts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["gamma", "delta", "alpha", "beta"],
        "{}",
        store.driver_name()
    );
}

/// Author filter returns exactly that author's posts.
pub async fn check_search_by_author(store: &dyn Store) {
    store.create(&authored_post("a1", "alice", 1)).await.unwrap();
    store.create(&authored_post("b1", "bob", 2)).await.unwrap();
    store.create(&authored_post("a2", "alice", 3)).await.unwrap();
    store.create(&sample_post("anon")).await.unwrap();

    let alice = store.search(&SearchFilter::by_author("alice")).await.unwrap();
    let names: Vec<&str> = alice.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a2", "a1"], "{}", store.driver_name());

    let bob = store.search(&SearchFilter::by_author("bob")).await.unwrap();
    assert_eq!(bob.len(), 1);

    let nobody = store.search(&SearchFilter::by_author("carol")).await.unwrap();
    assert!(nobody.is_empty());

    let all = store.search(&SearchFilter::all()).await.unwrap();
    assert_eq!(all.len(), 4);
}

/// Mutating a returned post does not change stored state.
pub async fn check_returned_values_are_copies(store: &dyn Store) {
    let post = sample_post("pristine");
    let mut created = store.create(&post).await.unwrap();
    created.title = "scribbled".into();

    let mut found = store.find_by_name("pristine").await.unwrap();
    found.content.clear();

    let mut listed = store.search(&SearchFilter::all()).await.unwrap();
    listed[0].publish = true;

    assert_eq!(
        store.find_by_name("pristine").await.unwrap(),
        post,
        "{}",
        store.driver_name()
    );
}
