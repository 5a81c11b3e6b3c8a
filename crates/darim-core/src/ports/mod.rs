//! Ports - trait definitions for the editor's collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod confirm;
mod post_api;
mod preview;

pub use auth::AuthApi;
pub use confirm::Confirm;
pub use post_api::PostApi;
pub use preview::PreviewRenderer;
