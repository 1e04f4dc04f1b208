//! # Tinkersnest Store
//!
//! Storage abstraction for Tinkersnest. Provides a trait-based interface
//! for post persistence with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store module abstracts post storage behind the [`Store`] trait,
//! so the query and command handlers never know which backend is active.
//! The durable implementation is [`SqliteStore`], with [`MemoryStore`] for
//! tests and development.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait every storage driver implements
//! - [`SqliteStore`] - SQLite-based persistent storage, one document per post
//! - [`MemoryStore`] - In-memory storage behind a single RwLock
//! - [`SearchFilter`] - Optional author constraint for searches
//! - [`StoreError`] - Domain outcomes (`NotFound`, `AlreadyExists`) and backend faults
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinkersnest_core::Post;
//! use tinkersnest_store::{SearchFilter, SqliteStore, Store};
//!
//! async fn example() {
//!     // Open a SQLite database
//!     let store = SqliteStore::open("tinkersnest.db").unwrap();
//!
//!     // Or use an in-memory database for testing
//!     let store = SqliteStore::open_memory().unwrap();
//!
//!     let post = Post::builder("hello").title("Hello").text("hi").build();
//!     store.create(&post).await.unwrap();
//!
//!     let newest = store.search(&SearchFilter::all()).await.unwrap();
//!     assert_eq!(newest.len(), 1);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Name is identity**: creating an existing name returns `AlreadyExists`
//! - **Write-once created**: updates never change the stored creation time
//! - **Search ordering**: newest first, ties broken by name
//! - **No retries**: faults propagate to the caller on the first failure

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{newest_first, SearchFilter, Store};
