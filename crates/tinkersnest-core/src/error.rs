//! Error types for Tinkersnest Core.

use thiserror::Error;

/// A post failed one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("post name is empty")]
    EmptyName,

    #[error("post has no content")]
    EmptyContent,

    #[error("content block {0} has no type")]
    MissingContentType(usize),

    #[error("content block {0} does not have any data associated")]
    EmptyContentData(usize),

    #[error("published post has no title")]
    MissingTitle,
}
