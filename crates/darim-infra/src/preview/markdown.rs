//! Markdown preview renderer.
//!
//! Renders CommonMark with tables, strikethrough and task lists. Raw HTML in
//! the source is escaped, so a preview cannot inject markup.

use pulldown_cmark::{Event, Options, Parser, html};

use darim_core::ports::PreviewRenderer;

#[derive(Debug, Clone)]
pub struct MarkdownPreview {
    options: Options,
    escape_html: bool,
}

impl MarkdownPreview {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        Self {
            options,
            escape_html: true,
        }
    }

    /// Pass raw HTML through unchanged. Only for trusted content.
    pub fn allow_raw_html(mut self) -> Self {
        self.escape_html = false;
        self
    }
}

impl Default for MarkdownPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewRenderer for MarkdownPreview {
    fn render(&self, content: &str) -> String {
        let escape_html = self.escape_html;
        let parser = Parser::new_ext(content, self.options).map(move |event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) if escape_html => Event::Text(raw),
            other => other,
        });

        let mut output = String::with_capacity(content.len() * 2);
        html::push_html(&mut output, parser);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_emphasis_and_headers() {
        let html = MarkdownPreview::new().render("# Title\n\nThis is **bold**.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_renders_tables_and_strikethrough() {
        let source = "| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~";
        let html = MarkdownPreview::new().render(source);
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = MarkdownPreview::new().render("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_raw_html_allowed_when_trusted() {
        let html = MarkdownPreview::new()
            .allow_raw_html()
            .render("<div>inside</div>");
        assert!(html.contains("<div>inside</div>"));
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(MarkdownPreview::new().render(""), "");
    }
}
