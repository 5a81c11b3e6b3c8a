//! Application state - the collaborators one editing session works with.

use std::sync::Arc;

use darim_core::domain::Credential;
use darim_core::ports::{PostApi, PreviewRenderer};
use darim_infra::InMemoryPostApi;

use crate::config::EditorConfig;

pub struct AppState {
    pub posts: Arc<dyn PostApi>,
    pub preview: Arc<dyn PreviewRenderer>,
    pub credential: Credential,
}

impl AppState {
    /// Build the state with the blog server when configured, in-memory otherwise.
    pub async fn new(config: &EditorConfig) -> anyhow::Result<Self> {
        let preview = preview_renderer();

        #[cfg(feature = "full")]
        {
            if let Some(url) = &config.api_url {
                return Self::connect(config, url, preview).await;
            }
        }

        if config.api_url.is_some() {
            tracing::warn!("Built without http support. Ignoring DARIM_API_URL.");
        } else {
            tracing::warn!("DARIM_API_URL not set. Running against in-memory posts.");
        }

        Ok(Self {
            posts: Arc::new(InMemoryPostApi::new().with_latency(config.offline_latency)),
            preview,
            credential: Credential::new(config.user_id),
        })
    }

    #[cfg(feature = "full")]
    async fn connect(
        config: &EditorConfig,
        url: &str,
        preview: Arc<dyn PreviewRenderer>,
    ) -> anyhow::Result<Self> {
        use darim_core::ports::AuthApi;
        use darim_infra::{ApiClient, HttpAuthApi, HttpConfig, HttpPostApi};

        let client = ApiClient::new(&HttpConfig {
            base_url: url.to_string(),
            timeout: config.http_timeout,
        })?;
        let auth = HttpAuthApi::new(client.clone());

        let credential = match &config.login {
            Some(login) => auth.login(&login.email, &login.password).await?.credential(),
            None => match auth.fetch_session().await {
                Ok(session) => session.credential(),
                Err(e) => {
                    tracing::warn!(error = %e, user_id = config.user_id, "No server session, using DARIM_USER_ID");
                    Credential::new(config.user_id)
                }
            },
        };

        tracing::info!(api_url = %url, user_id = credential.user_id, "Connected to blog server");

        Ok(Self {
            posts: Arc::new(HttpPostApi::new(client)),
            preview,
            credential,
        })
    }
}

#[cfg(feature = "full")]
fn preview_renderer() -> Arc<dyn PreviewRenderer> {
    Arc::new(darim_infra::MarkdownPreview::new())
}

#[cfg(not(feature = "full"))]
fn preview_renderer() -> Arc<dyn PreviewRenderer> {
    Arc::new(darim_infra::PlainTextPreview)
}
