//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Blog server base URL. `None` runs against the in-memory post API.
    pub api_url: Option<String>,
    pub http_timeout: Duration,
    /// Caller credential used when no login is configured.
    pub user_id: u64,
    pub login: Option<LoginConfig>,
    /// Post to open at start-up; a new post otherwise.
    pub post_id: Option<u64>,
    /// Artificial delay of the in-memory post API.
    pub offline_latency: Duration,
}

#[derive(Clone)]
pub struct LoginConfig {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginConfig")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl EditorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let login = match (env::var("DARIM_EMAIL"), env::var("DARIM_PASSWORD")) {
            (Ok(email), Ok(password)) => Some(LoginConfig { email, password }),
            _ => None,
        };

        Self {
            api_url: env::var("DARIM_API_URL").ok().filter(|url| !url.trim().is_empty()),
            http_timeout: Duration::from_secs(
                env::var("DARIM_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            user_id: env::var("DARIM_USER_ID")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
            login,
            post_id: env::var("DARIM_POST_ID").ok().and_then(|s| s.parse().ok()),
            offline_latency: Duration::from_millis(
                env::var("DARIM_OFFLINE_LATENCY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(300),
            ),
        }
    }
}
