//! Post endpoints.

use async_trait::async_trait;
use reqwest::Method;

use darim_core::domain::{Credential, Post, PostDraft, PostId, parse_datetime};
use darim_core::error::ApiError;
use darim_core::ports::PostApi;
use darim_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use super::client::ApiClient;

pub struct HttpPostApi {
    client: ApiClient,
}

impl HttpPostApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn fetch_post(
        &self,
        _credential: &Credential,
        id: PostId,
    ) -> Result<Option<Post>, ApiError> {
        match self.client.get::<PostResponse>(&format!("posts/{id}")).await {
            Ok(response) => post_from_response(response).map(Some),
            Err(ApiError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_post(
        &self,
        credential: &Credential,
        draft: &PostDraft,
    ) -> Result<Option<PostId>, ApiError> {
        let id: u64 = self
            .client
            .send_json(Method::POST, "posts", &create_request(credential, draft))
            .await?;
        Ok(Some(PostId(id)))
    }

    async fn update_post(
        &self,
        credential: &Credential,
        id: PostId,
        draft: &PostDraft,
    ) -> Result<bool, ApiError> {
        self.client
            .send_json(
                Method::PATCH,
                &format!("posts/{id}"),
                &update_request(credential, draft),
            )
            .await
            .map_err(|e| not_found_as(e, id))
    }

    async fn delete_post(&self, id: PostId) -> Result<bool, ApiError> {
        self.client
            .delete(&format!("posts/{id}"))
            .await
            .map_err(|e| not_found_as(e, id))
    }
}

fn create_request(credential: &Credential, draft: &PostDraft) -> CreatePostRequest {
    CreatePostRequest {
        user_id: credential.user_id,
        title: draft.title.clone(),
        date: draft.datetime(),
        content: draft.content.clone(),
    }
}

fn update_request(credential: &Credential, draft: &PostDraft) -> UpdatePostRequest {
    UpdatePostRequest {
        user_id: credential.user_id,
        title: Some(draft.title.clone()),
        date: Some(draft.datetime()),
        content: Some(draft.content.clone()),
    }
}

fn post_from_response(response: PostResponse) -> Result<Post, ApiError> {
    let date = parse_datetime(&response.date).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(Post {
        id: PostId(response.id),
        title: response.title,
        date,
        content: response.content,
    })
}

fn not_found_as(error: ApiError, id: PostId) -> ApiError {
    match error {
        ApiError::Status { status: 404, .. } => ApiError::NotFound(id),
        other => other,
    }
}
