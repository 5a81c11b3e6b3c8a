use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::date::format_datetime;

/// Server-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post entity - a blog post as persisted by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub date: NaiveDateTime,
    pub content: String,
}

impl Post {
    pub fn new(id: PostId, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            content: draft.content,
        }
    }

    /// The persistable fields without the identity.
    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            date: self.date,
            content: self.content.clone(),
        }
    }
}

/// The values sent on create and update, with the date in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub date: NaiveDateTime,
    pub content: String,
}

impl PostDraft {
    pub fn datetime(&self) -> String {
        format_datetime(&self.date)
    }
}
