//! Data Transfer Objects - request types for the API.

use serde::Deserialize;

/// Request to create a post. Presence is checked by the domain, not by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Request to update a post. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Raw pagination query. Kept as strings so junk values fall back to defaults instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}
