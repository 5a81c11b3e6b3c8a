//! The live, user-editable field values and blur candidates.

use chrono::NaiveDate;

use crate::domain::{Post, format_date};

/// One editable field of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Date,
    Content,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Date, Field::Content];

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Date => "date",
            Field::Content => "content",
        }
    }
}

/// Editable field set. The date is kept as typed (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub date: String,
    pub content: String,
}

impl PostFields {
    pub fn new(title: impl Into<String>, date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            content: content.into(),
        }
    }

    /// Blank fields for a new post, dated `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: format_date(today),
            ..Self::default()
        }
    }

    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            date: format_date(post.date.date()),
            content: post.content.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Date => &self.date,
            Field::Content => &self.content,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Date => self.date = value,
            Field::Content => self.content = value,
        }
    }

    /// True when no field is empty.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.date.is_empty() && !self.content.is_empty()
    }
}

/// Candidate values supplied to a save attempt.
///
/// A blur carries the one field that lost focus; an explicit save carries all three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    pub title: Option<String>,
    pub date: Option<String>,
    pub content: Option<String>,
}

impl Candidates {
    pub fn single(field: Field, value: impl Into<String>) -> Self {
        let mut candidates = Self::default();
        candidates.set(field, value);
        candidates
    }

    pub fn all(fields: &PostFields) -> Self {
        Self {
            title: Some(fields.title.clone()),
            date: Some(fields.date.clone()),
            content: Some(fields.content.clone()),
        }
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    pub fn date(mut self, value: impl Into<String>) -> Self {
        self.date = Some(value.into());
        self
    }

    pub fn content(mut self, value: impl Into<String>) -> Self {
        self.content = Some(value.into());
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Date => self.date.as_deref(),
            Field::Content => self.content.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::Title => self.title = value,
            Field::Date => self.date = value,
            Field::Content => self.content = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.content.is_none()
    }

    /// Merge a later set of candidates into this one. Later values win.
    pub fn merge(&mut self, later: Candidates) {
        if later.title.is_some() {
            self.title = later.title;
        }
        if later.date.is_some() {
            self.date = later.date;
        }
        if later.content.is_some() {
            self.content = later.content;
        }
    }

    /// Write the supplied values into the field set.
    pub fn apply_to(&self, fields: &mut PostFields) {
        for field in Field::ALL {
            if let Some(value) = self.get(field) {
                fields.set(field, value);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_latest_value_per_field() {
        let mut pending = Candidates::single(Field::Title, "first");
        pending.merge(Candidates::single(Field::Content, "body"));
        pending.merge(Candidates::single(Field::Title, "second"));

        assert_eq!(pending.title.as_deref(), Some("second"));
        assert_eq!(pending.content.as_deref(), Some("body"));
        assert_eq!(pending.date, None);
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut fields = PostFields::new("Title", "2024-01-01", "Body");
        Candidates::default().date("2024-02-02").apply_to(&mut fields);

        assert_eq!(fields, PostFields::new("Title", "2024-02-02", "Body"));
    }

    #[test]
    fn test_blank_fields_are_incomplete() {
        let fields = PostFields::blank(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(fields.date, "2024-01-01");
        assert!(!fields.is_complete());
        assert!(PostFields::new("a", "2024-01-01", "b").is_complete());
    }
}
