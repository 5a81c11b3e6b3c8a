//! Blog server client over HTTP.

mod auth;
mod client;
mod posts;

pub use auth::HttpAuthApi;
pub use client::{ApiClient, HttpConfig};
pub use posts::HttpPostApi;
