//! # Tinkersnest Testkit
//!
//! Testing utilities for Tinkersnest.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Contract checks**: The behavior every storage driver must share
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Sample posts and ready-made stores and dispatchers
//!
//! ## Driver Contract
//!
//! A new driver proves itself by passing the same checks as the built-in ones:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tinkersnest_store::{MemoryStore, Store};
//! use tinkersnest_testkit::contract::check_all;
//!
//! #[tokio::test]
//! async fn memory_store_contract() {
//!     check_all(|| Arc::new(MemoryStore::new()) as Arc<dyn Store>).await;
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tinkersnest_testkit::generators::post;
//!
//! proptest! {
//!     #[test]
//!     fn generated_posts_validate(post in post()) {
//!         prop_assert!(tinkersnest_core::validate_post(&post).is_ok());
//!     }
//! }
//! ```

pub mod contract;
pub mod fixtures;
pub mod generators;

pub use contract::check_all;
pub use fixtures::{
    all_dispatchers, all_stores, authored_post, publish_patch, sample_post, FIXTURE_CREATED,
};
