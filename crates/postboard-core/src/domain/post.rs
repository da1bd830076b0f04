use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, ValidationError};

/// Maximum title length, in characters, after trimming.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum content length, in characters, after trimming.
pub const MAX_CONTENT_CHARS: usize = 5000;

/// Author stored when none is given.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Numeric post identifier. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    /// Parse a path segment. Anything that is not an integer is `InvalidId`; an
    /// integer no post can carry (negative or beyond `u64`) is `NotFound`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidId(s.to_string()));
        }

        s.parse::<u64>()
            .map(PostId)
            .map_err(|_| DomainError::post_not_found(s))
    }
}

/// Post entity - a titled piece of content with an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a post from validated input, stamping both timestamps with the current time.
    pub fn new(id: PostId, input: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: input.title,
            content: input.content,
            author: input.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated patch. `updated_at` is refreshed even for an empty patch.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        self.updated_at = Utc::now();
    }
}

/// Unvalidated input for creating a post.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Trimmed, validated input ready to become a [`Post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostDraft {
    pub fn validate(self) -> Result<NewPost, ValidationError> {
        let title = non_blank(self.title);
        let content = non_blank(self.content);

        let (title, content) = match (title, content) {
            (Some(title), Some(content)) => (title, content),
            (title, content) => {
                let mut missing = Vec::with_capacity(2);
                if title.is_none() {
                    missing.push("title");
                }
                if content.is_none() {
                    missing.push("content");
                }
                return Err(ValidationError::MissingFields(missing));
            }
        };

        check_title(&title)?;
        check_content(&content)?;

        Ok(NewPost {
            title,
            content,
            author: non_blank(self.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        })
    }
}

/// Unvalidated partial update. Absent or blank fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Trimmed, validated partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostChanges {
    pub fn validate(self) -> Result<PostPatch, ValidationError> {
        let title = non_blank(self.title);
        let content = non_blank(self.content);

        if let Some(title) = &title {
            check_title(title)?;
        }
        if let Some(content) = &content {
            check_content(content)?;
        }

        Ok(PostPatch {
            title,
            content,
            author: non_blank(self.author),
        })
    }
}

/// Trim a field, treating blank input the same as absent input.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_title(title: &str) -> Result<(), ValidationError> {
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

fn check_content(content: &str) -> Result<(), ValidationError> {
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(ValidationError::ContentTooLong);
    }
    Ok(())
}
