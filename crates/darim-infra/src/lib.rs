//! # Darim Infrastructure
//!
//! Concrete implementations of the ports defined in `darim-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `http` - Blog server client via reqwest
//! - `markdown` - Markdown preview via pulldown-cmark

pub mod post_api;
pub mod preview;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - In-Memory
pub use post_api::InMemoryPostApi;
pub use preview::PlainTextPreview;

#[cfg(feature = "http")]
pub use http::{ApiClient, HttpAuthApi, HttpConfig, HttpPostApi};

#[cfg(feature = "markdown")]
pub use preview::MarkdownPreview;
