use serde::{Deserialize, Serialize};

/// Identifies the caller on post calls. The blog server keys ownership by user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credential {
    pub user_id: u64,
}

impl Credential {
    pub fn new(user_id: u64) -> Self {
        Self { user_id }
    }
}

/// Logged-in user session as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: u64,
    pub user_email: String,
    pub user_name: String,
    pub user_public_key: String,
    pub user_avatar_url: Option<String>,
}

impl Session {
    pub fn credential(&self) -> Credential {
        Credential::new(self.user_id)
    }
}

/// Details collected by the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpDetails {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar_url: Option<String>,
}

impl SignUpDetails {
    /// Name, email and password must all be present; surrounding whitespace does not count.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.trim().is_empty()
    }
}
