//! Sign-up form - a single binary attempt with no diffing and no retry.

use crate::domain::SignUpDetails;
use crate::ports::AuthApi;

use super::status::{SaveEvent, SaveStatus};

#[derive(Debug, Default)]
pub struct SignUpForm {
    details: SignUpDetails,
    status: SaveStatus,
}

impl SignUpForm {
    pub fn new(details: SignUpDetails) -> Self {
        Self {
            details,
            status: SaveStatus::None,
        }
    }

    pub fn details(&self) -> &SignUpDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut SignUpDetails {
        &mut self.details
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    /// Request a sign-up token. Does nothing while a field is blank.
    pub async fn submit(&mut self, api: &dyn AuthApi) -> SaveStatus {
        if self.status.is_ongoing() || !self.details.is_complete() {
            return self.status;
        }

        self.status = SaveStatus::Ongoing;
        let event = match api.set_sign_up_token(&self.details).await {
            Ok(true) => SaveEvent::Succeeded,
            Ok(false) => SaveEvent::Failed,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to request sign-up token");
                SaveEvent::Failed
            }
        };
        self.status = self.status.on(event).unwrap_or(SaveStatus::Failure);

        tracing::info!(status = ?self.status, "Sign-up submitted");
        self.status
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::Session;
    use crate::error::ApiError;

    struct TokenApi {
        accept: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AuthApi for TokenApi {
        async fn login(&self, _email: &str, _password: &str) -> Result<Session, ApiError> {
            Err(ApiError::Unauthorized)
        }

        async fn logout(&self) -> Result<bool, ApiError> {
            Ok(true)
        }

        async fn fetch_session(&self) -> Result<Session, ApiError> {
            Err(ApiError::Unauthorized)
        }

        async fn set_sign_up_token(&self, _details: &SignUpDetails) -> Result<bool, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.accept)
        }
    }

    fn details() -> SignUpDetails {
        SignUpDetails {
            name: "Park".to_string(),
            email: "park@example.com".to_string(),
            password: "secret".to_string(),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_blank_field_never_calls_api() {
        let api = TokenApi {
            accept: true,
            calls: AtomicUsize::new(0),
        };
        let mut form = SignUpForm::new(details());
        form.details_mut().email = "   ".to_string();

        assert_eq!(form.submit(&api).await, SaveStatus::None);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_success() {
        let api = TokenApi {
            accept: true,
            calls: AtomicUsize::new(0),
        };
        let mut form = SignUpForm::new(details());

        assert_eq!(form.submit(&api).await, SaveStatus::Success);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_can_be_resubmitted() {
        let api = TokenApi {
            accept: false,
            calls: AtomicUsize::new(0),
        };
        let mut form = SignUpForm::new(details());

        assert_eq!(form.submit(&api).await, SaveStatus::Failure);
        assert_eq!(form.submit(&api).await, SaveStatus::Failure);
        assert_eq!(api.calls.load(Ordering::SeqCst), 2);
    }
}
