/// Renders post content for the preview pane.
pub trait PreviewRenderer: Send + Sync {
    /// Render raw content into display markup.
    fn render(&self, content: &str) -> String;
}
