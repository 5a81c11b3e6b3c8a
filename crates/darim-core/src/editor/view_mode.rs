//! View-mode controller - raw editor or rendered preview.
//!
//! Both modes read the same field set; switching never touches it.

use crate::ports::PreviewRenderer;

use super::fields::PostFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Editor,
    Preview,
}

impl ViewMode {
    /// Existing posts open in preview, new posts in the editor.
    pub fn initial(has_identity: bool) -> Self {
        if has_identity {
            ViewMode::Preview
        } else {
            ViewMode::Editor
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Editor => ViewMode::Preview,
            ViewMode::Preview => ViewMode::Editor,
        }
    }
}

/// What the current view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewFrame {
    Editor(PostFields),
    Preview {
        title: String,
        date: String,
        html: String,
    },
}

/// Render the field set for a view mode.
pub fn frame(mode: ViewMode, fields: &PostFields, renderer: &dyn PreviewRenderer) -> ViewFrame {
    match mode {
        ViewMode::Editor => ViewFrame::Editor(fields.clone()),
        ViewMode::Preview => ViewFrame::Preview {
            title: fields.title.clone(),
            date: fields.date.clone(),
            html: renderer.render(&fields.content),
        },
    }
}
