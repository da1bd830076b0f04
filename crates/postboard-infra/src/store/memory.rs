//! In-memory post store - the only backing store; data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, Post, PostChanges, PostDraft, PostId};
use postboard_core::error::DomainError;
use postboard_core::ports::{PageRequest, PostPage, PostStore};

struct StoreState {
    /// Newest first.
    posts: Vec<Post>,
    /// Always greater than any id ever issued.
    next_id: u64,
}

/// In-memory post store using a `Vec` and an id counter behind one async RwLock.
///
/// Writers hold the lock across validation, id assignment and insertion, so
/// concurrent creates never share an id and readers never see a partial write.
pub struct InMemoryPostStore {
    state: RwLock<StoreState>,
}

impl InMemoryPostStore {
    /// An empty store. The first created post gets id 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A store holding the welcome post (id 1). The next created post gets id 2.
    pub fn seeded() -> Self {
        let welcome = Post::new(
            PostId(1),
            NewPost {
                title: "Welcome Post".to_string(),
                content: "Selamat datang di API kami!".to_string(),
                author: "Admin".to_string(),
            },
        );

        Self {
            state: RwLock::new(StoreState {
                posts: vec![welcome],
                next_id: 2,
            }),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self, page: PageRequest) -> PostPage {
        let state = self.state.read().await;

        let posts = state
            .posts
            .iter()
            .skip(page.offset())
            .take(page.limit)
            .cloned()
            .collect();

        PostPage {
            posts,
            total: state.posts.len(),
            page: page.page,
            limit: page.limit,
        }
    }

    async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        let state = self.state.read().await;
        state
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let new_post = draft.validate()?;

        let mut state = self.state.write().await;
        let id = PostId(state.next_id);
        state.next_id += 1;

        let post = Post::new(id, new_post);
        state.posts.insert(0, post.clone());

        tracing::debug!(post_id = %id, total = state.posts.len(), "Post created");
        Ok(post)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, DomainError> {
        let mut state = self.state.write().await;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))?;

        // Validate everything before touching the record.
        let patch = changes.validate()?;
        post.apply(patch);

        tracing::debug!(post_id = %id, "Post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<Post, DomainError> {
        let mut state = self.state.write().await;
        let index = state
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))?;

        let post = state.posts.remove(index);

        tracing::debug!(post_id = %id, total = state.posts.len(), "Post deleted");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use postboard_core::domain::{MAX_CONTENT_CHARS, MAX_TITLE_CHARS};
    use postboard_core::error::ValidationError;

    use super::*;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            author: None,
        }
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = InMemoryPostStore::seeded();
        let page = store.list(PageRequest::default()).await;

        assert_eq!(page.total, 1);
        assert_eq!(page.posts[0].id, PostId(1));
        assert_eq!(page.posts[0].author, "Admin");
        assert_eq!(page.posts[0].content, "Selamat datang di API kami!");

        let created = store.create(draft("A", "B")).await.unwrap();
        assert_eq!(created.id, PostId(2));
        assert_eq!(created.author, "Anonymous");
    }

    #[tokio::test]
    async fn test_create_prepends_with_increasing_ids() {
        let store = InMemoryPostStore::new();
        let first = store.create(draft("one", "1")).await.unwrap();
        let second = store.create(draft("two", "2")).await.unwrap();

        assert!(second.id > first.id);

        let page = store.list(PageRequest::default()).await;
        let ids: Vec<_> = page.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = InMemoryPostStore::new();
        let first = store.create(draft("one", "1")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let next = store.create(draft("two", "2")).await.unwrap();
        assert!(next.id > first.id);
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_mutate() {
        let store = InMemoryPostStore::seeded();

        let err = store
            .create(draft(&"t".repeat(MAX_TITLE_CHARS + 1), "body"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::TitleTooLong)
        ));

        let err = store.create(PostDraft::default()).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::MissingFields(_))
        ));

        assert_eq!(store.list(PageRequest::default()).await.total, 1);
        // The counter did not move either.
        let created = store.create(draft("A", "B")).await.unwrap();
        assert_eq!(created.id, PostId(2));
    }

    #[tokio::test]
    async fn test_partial_update() {
        let store = InMemoryPostStore::new();
        let post = store.create(draft("A", "B")).await.unwrap();

        let updated = store
            .update(
                post.id,
                PostChanges {
                    title: Some(" C ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "C");
        assert_eq!(updated.content, "B");
        assert_eq!(updated.created_at, post.created_at);
        assert_eq!(store.get(post.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_empty_update_only_touches_updated_at() {
        let store = InMemoryPostStore::new();
        let post = store.create(draft("A", "B")).await.unwrap();

        let updated = store
            .update(post.id, PostChanges::default())
            .await
            .unwrap();

        assert_eq!(updated.title, post.title);
        assert_eq!(updated.content, post.content);
        assert_eq!(updated.author, post.author);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_record_untouched() {
        let store = InMemoryPostStore::new();
        let post = store.create(draft("A", "B")).await.unwrap();

        let err = store
            .update(
                post.id,
                PostChanges {
                    title: Some("new title".to_string()),
                    content: Some("c".repeat(MAX_CONTENT_CHARS + 1)),
                    author: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::ContentTooLong)
        ));
        assert_eq!(store.get(post.id).await.unwrap(), post);
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let store = InMemoryPostStore::seeded();

        assert!(matches!(
            store.get(PostId(99)).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            store.update(PostId(99), PostChanges::default()).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete(PostId(99)).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = InMemoryPostStore::seeded();
        let deleted = store.delete(PostId(1)).await.unwrap();

        assert_eq!(deleted.author, "Admin");
        assert!(matches!(
            store.get(PostId(1)).await,
            Err(DomainError::NotFound { .. })
        ));
        assert_eq!(store.list(PageRequest::default()).await.total, 0);
    }

    #[tokio::test]
    async fn test_pagination_windows() {
        let store = InMemoryPostStore::seeded();
        let newest = store.create(draft("A", "B")).await.unwrap();

        let page = store.list(PageRequest::new(2, 1)).await;
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].id, PostId(1));
        assert_eq!(page.total_pages(), 2);

        let page = store.list(PageRequest::new(1, 1)).await;
        assert_eq!(page.posts[0].id, newest.id);

        let page = store.list(PageRequest::new(5, 10)).await;
        assert!(page.posts.is_empty());
        assert_eq!(page.total, 2);

        let page = store.list(PageRequest::new(1, usize::MAX)).await;
        assert_eq!(page.posts.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(InMemoryPostStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(draft(&format!("post {i}"), "body")).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 32);
        assert_eq!(store.list(PageRequest::new(1, 100)).await.total, 32);
    }
}
