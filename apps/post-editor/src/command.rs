//! Editor commands read from stdin.
//!
//! Setting a field is a blur: the value is committed and a save is attempted.

use darim_core::editor::{Field, ViewMode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Commit a field value, as when the field loses focus.
    Blur(Field, String),
    /// Append a line to the content and commit it.
    Append(String),
    /// Attempt to save every field.
    Save,
    Retry,
    Delete,
    View(ViewMode),
    Toggle,
    Show,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0} needs a value")]
    MissingValue(&'static str),
}

pub const HELP: &str = "\
commands:
  title <text>      set the title
  date <YYYY-MM-DD> set the date
  content <text>    replace the content (\\n starts a new line)
  + <text>          append a line to the content
  save              save all fields
  retry             retry the last failed save
  edit | preview    switch view mode
  toggle            toggle view mode
  show              print the current view
  status            print the save status
  delete            delete the post
  quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(rest) = line.strip_prefix('+') {
            return Ok(Command::Append(unescape(rest.trim_start())));
        }

        let (word, rest) = match line.trim_start().split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim_start())),
            None => (line.trim(), None),
        };

        match word {
            "title" => field_value(Field::Title, rest),
            "date" => field_value(Field::Date, rest.map(str::trim)),
            "content" => field_value(Field::Content, rest),
            "save" => Ok(Command::Save),
            "retry" => Ok(Command::Retry),
            "delete" => Ok(Command::Delete),
            "edit" => Ok(Command::View(ViewMode::Editor)),
            "preview" => Ok(Command::View(ViewMode::Preview)),
            "toggle" => Ok(Command::Toggle),
            "show" | "" => Ok(Command::Show),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn field_value(field: Field, value: Option<&str>) -> Result<Command, CommandError> {
    // An explicitly empty title or content is allowed; the value is what blurs.
    match value {
        Some(value) => Ok(Command::Blur(field, unescape(value))),
        None if field == Field::Date => Err(CommandError::MissingValue(field.name())),
        None => Ok(Command::Blur(field, String::new())),
    }
}

fn unescape(value: &str) -> String {
    value.replace("\\n", "\n")
}

/// Whether a delete confirmation answer means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_blur() {
        assert_eq!(
            Command::parse("title Hello world"),
            Ok(Command::Blur(Field::Title, "Hello world".to_string()))
        );
        assert_eq!(
            Command::parse("date  2024-01-01 "),
            Ok(Command::Blur(Field::Date, "2024-01-01".to_string()))
        );
    }

    #[test]
    fn test_parse_content_escapes() {
        assert_eq!(
            Command::parse("content # Hi\\n\\nbody"),
            Ok(Command::Blur(Field::Content, "# Hi\n\nbody".to_string()))
        );
        assert_eq!(
            Command::parse("+ - item"),
            Ok(Command::Append("- item".to_string()))
        );
    }

    #[test]
    fn test_parse_clears_field() {
        assert_eq!(
            Command::parse("title"),
            Ok(Command::Blur(Field::Title, String::new()))
        );
        assert_eq!(Command::parse("date"), Err(CommandError::MissingValue("date")));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("preview"), Ok(Command::View(ViewMode::Preview)));
        assert_eq!(Command::parse("edit"), Ok(Command::View(ViewMode::Editor)));
        assert_eq!(Command::parse(""), Ok(Command::Show));
        assert_eq!(Command::parse("exit\n"), Ok(Command::Quit));
        assert_eq!(
            Command::parse("publish"),
            Err(CommandError::Unknown("publish".to_string()))
        );
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }
}
