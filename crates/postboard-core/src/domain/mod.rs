//! Domain entities - the core business objects.

mod post;

pub use post::{
    DEFAULT_AUTHOR, MAX_CONTENT_CHARS, MAX_TITLE_CHARS, NewPost, Post, PostChanges, PostDraft,
    PostId, PostPatch,
};
