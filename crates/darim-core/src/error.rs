//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Errors raised by the blog server collaborators (post and auth APIs).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Post not found: {0}")]
    NotFound(PostId),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Editing session errors.
///
/// Guard failures are not errors: an incomplete new post or an unchanged
/// field simply skips the save.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("Editing session is closed")]
    SessionClosed,

    #[error("Post has not been created yet")]
    NoIdentity,

    #[error("Nothing to retry")]
    RetryUnavailable,
}

/// Date parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Date is empty")]
    Empty,

    #[error("Invalid date: {0}")]
    Invalid(String),
}
