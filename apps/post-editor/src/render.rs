//! Text rendering of editor frames and save results.

use darim_core::editor::{EditorState, SaveReport, SaveStatus, SkipReason, ViewFrame, ViewMode};

pub fn frame(frame: &ViewFrame) -> String {
    match frame {
        ViewFrame::Editor(fields) => format!(
            "[editor]\ntitle:   {}\ndate:    {}\ncontent:\n{}",
            fields.title, fields.date, fields.content
        ),
        ViewFrame::Preview { title, date, html } => {
            format!("[preview]\n{title}\n{date}\n\n{}", html.trim_end())
        }
    }
}

/// Status line shown after every state change.
pub fn state(state: &EditorState) -> String {
    if state.closed {
        return "(post deleted)".to_string();
    }

    let post = match state.post_id {
        Some(id) => format!("post #{id}"),
        None => "new post".to_string(),
    };
    let mode = match state.view_mode {
        ViewMode::Editor => "editor",
        ViewMode::Preview => "preview",
    };

    let mut line = format!("({post}, {mode}");
    if state.status != SaveStatus::None {
        line.push_str(", ");
        line.push_str(state.status.label());
    }
    if state.can_retry {
        line.push_str(" - type `retry`");
    }
    line.push(')');
    line
}

/// Message for a finished save attempt, if it is worth showing.
pub fn report(report: &SaveReport) -> Option<&'static str> {
    match report {
        SaveReport::Skipped(SkipReason::Incomplete) => {
            Some("not saved yet: title, date and content are all required")
        }
        SaveReport::Skipped(SkipReason::InvalidDate) => Some("not saved: date must be YYYY-MM-DD"),
        SaveReport::Skipped(SkipReason::Closed) => Some("post was deleted"),
        SaveReport::Skipped(SkipReason::Clean) | SaveReport::Coalesced | SaveReport::Settled(_) => {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use darim_core::domain::PostId;
    use darim_core::editor::PostFields;

    fn base() -> EditorState {
        EditorState {
            status: SaveStatus::None,
            view_mode: ViewMode::Editor,
            post_id: None,
            can_retry: false,
            closed: false,
        }
    }

    #[test]
    fn test_state_line() {
        assert_eq!(state(&base()), "(new post, editor)");

        let saved = EditorState {
            status: SaveStatus::Success,
            post_id: Some(PostId(7)),
            view_mode: ViewMode::Preview,
            ..base()
        };
        assert_eq!(state(&saved), "(post #7, preview, Saved)");

        let failed = EditorState {
            status: SaveStatus::Failure,
            can_retry: true,
            ..base()
        };
        assert_eq!(state(&failed), "(new post, editor, Failed to save - type `retry`)");
    }

    #[test]
    fn test_frame_editor() {
        let fields = PostFields::new("Hello", "2024-01-01", "World");
        assert_eq!(
            frame(&ViewFrame::Editor(fields)),
            "[editor]\ntitle:   Hello\ndate:    2024-01-01\ncontent:\nWorld"
        );
    }

    #[test]
    fn test_report_hides_clean_skips() {
        assert_eq!(report(&SaveReport::Skipped(SkipReason::Clean)), None);
        assert!(report(&SaveReport::Skipped(SkipReason::Incomplete)).is_some());
    }
}
