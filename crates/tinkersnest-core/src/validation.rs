//! Post validation: structural checks applied before a post reaches storage.

use crate::error::ValidationError;
use crate::post::Post;

/// Validate a post's name.
///
/// Any non-empty string is a valid name; it is stored and looked up verbatim.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a post.
///
/// This performs:
/// - Name check
/// - Content presence (at least one block)
/// - Per-block type and data checks
/// - Title requirement for published posts
pub fn validate_post(post: &Post) -> Result<(), ValidationError> {
    // 1. Name
    validate_name(&post.name)?;

    // 2. Content must not be empty
    if post.content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }

    // 3. Every block needs a type and a payload
    for (index, block) in post.content.iter().enumerate() {
        if block.kind.is_empty() {
            return Err(ValidationError::MissingContentType(index));
        }
        if !block.has_data() {
            return Err(ValidationError::EmptyContentData(index));
        }
    }

    // 4. Published posts need a title
    if post.publish && post.title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    Ok(())
}
