//! # Tinkersnest Core
//!
//! Pure primitives for Tinkersnest: posts, content blocks, validation and
//! the partial-update merge policy.
//!
//! This crate contains no I/O, no storage, no networking.
//!
//! ## Key Types
//!
//! - [`Post`] - The unit of content published on the blog
//! - [`Content`] - A typed block of raw bytes inside a post
//! - [`ValidationError`] - Invariant violations detected before storage
//!
//! ## Updates
//!
//! Updates are partial: see [`merge_update`] for which fields an incoming
//! post may leave empty.

pub mod error;
pub mod merge;
pub mod post;
pub mod validation;

pub use error::ValidationError;
pub use merge::merge_update;
pub use post::{now_millis, Content, Post, PostBuilder, CONTENT_IMAGE, CONTENT_TEXT};
pub use validation::{validate_name, validate_post};
