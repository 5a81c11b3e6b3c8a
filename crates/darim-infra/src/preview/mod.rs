//! Preview renderers.

#[cfg(feature = "markdown")]
mod markdown;
mod plain;

#[cfg(feature = "markdown")]
pub use markdown::MarkdownPreview;
pub use plain::PlainTextPreview;
