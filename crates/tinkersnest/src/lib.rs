//! # Tinkersnest
//!
//! The post lifecycle engine behind a small blog-publishing backend.
//!
//! ## Overview
//!
//! Tinkersnest stores blog posts through an interchangeable storage driver
//! and exposes them through two kinds of request:
//!
//! - **Queries** ([`FindPost`], [`SearchPosts`]) read posts and never mutate
//! - **Commands** ([`StorePost`], [`DeletePost`]) create, update and delete
//!
//! A [`Dispatcher`] owns the one active driver, selected from [`Config`] at
//! startup, and routes requests to it. The HTTP layer and the CLI client sit
//! outside this crate and talk to it only through the dispatcher.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinkersnest::{Config, Dispatcher, Post};
//!
//! async fn example() {
//!     let config = Config::load("tinkersnest.toml").unwrap();
//!     tinkersnest::init_logging(&config.log).unwrap();
//!
//!     let blog = Dispatcher::from_config(&config).unwrap();
//!
//!     let post = Post::builder("hello-world")
//!         .title("Hello, world")
//!         .text("first post")
//!         .build();
//!     blog.create_post(post).await.unwrap();
//!
//!     // Publish without touching title or content
//!     let patch = Post::builder("hello-world").publish(true).build();
//!     blog.update_post("hello-world", &patch).await.unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `tinkersnest::core` - Post, Content, validation, merge policy
//! - `tinkersnest::store` - Store trait, in-memory and SQLite drivers

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod queries;

// Re-export component crates
pub use tinkersnest_core as core;
pub use tinkersnest_store as store;

// Re-export main types for convenience
pub use commands::{Command, DeletePost, StorePost};
pub use config::{Config, ConfigError, LogConfig, StorageConfig};
pub use dispatch::{open_store, Dispatcher};
pub use error::{BlogError, Result};
pub use logging::init_logging;
pub use queries::{FindPost, Query, SearchPosts};

pub use tinkersnest_core::{merge_update, Content, Post, ValidationError};
pub use tinkersnest_store::{MemoryStore, SearchFilter, SqliteStore, Store, StoreError};
