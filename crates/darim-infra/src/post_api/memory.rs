//! In-memory post API - used as fallback when no blog server is configured.
//!
//! Mirrors the server rules: only the owner may update a post, and missing
//! posts are reported as not found.
//! Note: Posts are lost on process restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use darim_core::domain::{Credential, Post, PostDraft, PostId};
use darim_core::error::ApiError;
use darim_core::ports::PostApi;

struct StoredPost {
    owner: u64,
    post: Post,
}

/// In-memory post store with optional latency and failure injection.
pub struct InMemoryPostApi {
    posts: RwLock<HashMap<PostId, StoredPost>>,
    next_id: AtomicU64,
    fail_next: AtomicUsize,
    latency: Option<Duration>,
}

impl InMemoryPostApi {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            fail_next: AtomicUsize::new(0),
            latency: None,
        }
    }

    /// Delay every call, so in-progress states are observable.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make the next `count` create/update/delete calls fail with a transport error.
    pub fn fail_next(&self, count: usize) {
        self.fail_next.store(count, Ordering::SeqCst);
    }

    /// Store a post directly, bypassing failure injection.
    pub async fn insert(&self, owner: &Credential, draft: PostDraft) -> PostId {
        let id = PostId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut posts = self.posts.write().await;
        posts.insert(
            id,
            StoredPost {
                owner: owner.user_id,
                post: Post::new(id, draft),
            },
        );
        id
    }

    pub async fn get(&self, id: PostId) -> Option<Post> {
        let posts = self.posts.read().await;
        posts.get(&id).map(|stored| stored.post.clone())
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    /// Latency plus failure injection, for calls that write.
    async fn simulate(&self) -> Result<(), ApiError> {
        self.delay().await;

        let injected = self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if injected {
            tracing::debug!("Injected post API failure");
            return Err(ApiError::Transport("injected failure".to_string()));
        }

        Ok(())
    }
}

impl Default for InMemoryPostApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostApi for InMemoryPostApi {
    async fn fetch_post(
        &self,
        credential: &Credential,
        id: PostId,
    ) -> Result<Option<Post>, ApiError> {
        self.delay().await;

        let posts = self.posts.read().await;
        match posts.get(&id) {
            Some(stored) if stored.owner != credential.user_id => Err(ApiError::Unauthorized),
            Some(stored) => Ok(Some(stored.post.clone())),
            None => Ok(None),
        }
    }

    async fn create_post(
        &self,
        credential: &Credential,
        draft: &PostDraft,
    ) -> Result<Option<PostId>, ApiError> {
        self.simulate().await?;

        if draft.title.is_empty() || draft.content.is_empty() {
            return Err(ApiError::Rejected("title and content are required".to_string()));
        }

        let id = self.insert(credential, draft.clone()).await;
        tracing::debug!(post_id = %id, "Post stored");
        Ok(Some(id))
    }

    async fn update_post(
        &self,
        credential: &Credential,
        id: PostId,
        draft: &PostDraft,
    ) -> Result<bool, ApiError> {
        self.simulate().await?;

        let mut posts = self.posts.write().await;
        let stored = posts.get_mut(&id).ok_or(ApiError::NotFound(id))?;
        if stored.owner != credential.user_id {
            return Err(ApiError::Unauthorized);
        }

        stored.post = Post::new(id, draft.clone());
        tracing::debug!(post_id = %id, "Post overwritten");
        Ok(true)
    }

    async fn delete_post(&self, id: PostId) -> Result<bool, ApiError> {
        self.simulate().await?;

        let mut posts = self.posts.write().await;
        match posts.remove(&id) {
            Some(_) => Ok(true),
            None => Err(ApiError::NotFound(id)),
        }
    }
}
