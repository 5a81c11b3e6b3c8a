//! Plain-text preview - the fallback when markdown support is compiled out.

use darim_core::ports::PreviewRenderer;

/// Escapes the content and wraps each blank-line separated block in `<p>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextPreview;

impl PreviewRenderer for PlainTextPreview {
    fn render(&self, content: &str) -> String {
        content
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .map(|block| format!("<p>{}</p>\n", escape(block).replace('\n', "<br />\n")))
            .collect()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
