//! Domain-level error types.

use std::fmt;

use thiserror::Error;

/// Field-level validation failures for post input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields were absent or blank. Lists the missing field names.
    #[error("Title and content are required")]
    MissingFields(Vec<&'static str>),

    #[error("Title must be less than 200 characters")]
    TitleTooLong,

    #[error("Content must be less than 5000 characters")]
    ContentTooLong,
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid post ID: {0:?}")]
    InvalidId(String),

    /// `id` is the requested id as written, which may not fit a [`PostId`](crate::domain::PostId).
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn post_not_found(id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        }
    }
}
