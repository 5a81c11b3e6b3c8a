//! Authentication ports. These wrap the server's session endpoints and are
//! only used to obtain the caller credential and to run the sign-up form.

use async_trait::async_trait;

use crate::domain::{Session, SignUpDetails};
use crate::error::ApiError;

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Log in and open a server-side session.
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    /// Close the server-side session.
    async fn logout(&self) -> Result<bool, ApiError>;

    /// Refresh the current session.
    async fn fetch_session(&self) -> Result<Session, ApiError>;

    /// Request a sign-up token; the server mails it to the user.
    async fn set_sign_up_token(&self, details: &SignUpDetails) -> Result<bool, ApiError>;
}
