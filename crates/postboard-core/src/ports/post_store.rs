use async_trait::async_trait;

use crate::domain::{Post, PostChanges, PostDraft, PostId};
use crate::error::DomainError;

/// Storage for posts, ordered newest-created first.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Return one page of posts together with the total count.
    async fn list(&self, page: PageRequest) -> PostPage;

    /// Find a post by id.
    async fn get(&self, id: PostId) -> Result<Post, DomainError>;

    /// Validate a draft, assign the next id and insert it at the front.
    async fn create(&self, draft: PostDraft) -> Result<Post, DomainError>;

    /// Apply a partial update to an existing post.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, DomainError>;

    /// Remove a post and return it.
    async fn delete(&self, id: PostId) -> Result<Post, DomainError>;
}

/// A 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_LIMIT: usize = 10;

    /// Build a page request, replacing zero values with the defaults.
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: if page == 0 { Self::DEFAULT_PAGE } else { page },
            limit: if limit == 0 { Self::DEFAULT_LIMIT } else { limit },
        }
    }

    /// Parse raw query values. Missing, non-numeric or zero values fall back to the defaults.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| {
            raw.and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(0)
        };
        Self::new(parse(page), parse(limit))
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_LIMIT)
    }
}

/// One page of posts.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl PostPage {
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.limit)
    }
}
