//! Session and sign-up endpoints.

use async_trait::async_trait;
use reqwest::Method;

use darim_core::domain::{Session, SignUpDetails};
use darim_core::error::ApiError;
use darim_core::ports::AuthApi;
use darim_shared::dto::{LoginRequest, SessionResponse, SignUpRequest};

use super::client::ApiClient;

pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: SessionResponse = self
            .client
            .send_json(Method::POST, "auth/login", &request)
            .await?;

        tracing::info!(user_id = response.user_id, "Logged in");
        Ok(session_from_response(response))
    }

    async fn logout(&self) -> Result<bool, ApiError> {
        self.client.delete("auth/logout").await
    }

    async fn fetch_session(&self) -> Result<Session, ApiError> {
        let response: SessionResponse = self.client.get("auth").await?;
        Ok(session_from_response(response))
    }

    async fn set_sign_up_token(&self, details: &SignUpDetails) -> Result<bool, ApiError> {
        let request = SignUpRequest {
            name: details.name.clone(),
            email: details.email.clone(),
            password: details.password.clone(),
            avatar_url: details.avatar_url.clone(),
        };
        self.client
            .send_json(Method::POST, "auth/token", &request)
            .await
    }
}

fn session_from_response(response: SessionResponse) -> Session {
    Session {
        user_id: response.user_id,
        user_email: response.user_email,
        user_name: response.user_name,
        user_public_key: response.user_public_key,
        user_avatar_url: response.user_avatar_url,
    }
}
