use async_trait::async_trait;

use crate::domain::{Credential, Post, PostDraft, PostId};
use crate::error::ApiError;

/// Post API - abstraction over the blog server's post endpoints.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Load a post for editing. `Ok(None)` when the post does not exist.
    async fn fetch_post(
        &self,
        credential: &Credential,
        id: PostId,
    ) -> Result<Option<Post>, ApiError>;

    /// Create a post. `Ok(None)` when the server accepted the call but returned no identity.
    async fn create_post(
        &self,
        credential: &Credential,
        draft: &PostDraft,
    ) -> Result<Option<PostId>, ApiError>;

    /// Overwrite title, date and content of an existing post.
    async fn update_post(
        &self,
        credential: &Credential,
        id: PostId,
        draft: &PostDraft,
    ) -> Result<bool, ApiError>;

    /// Delete a post.
    async fn delete_post(&self, id: PostId) -> Result<bool, ApiError>;
}
