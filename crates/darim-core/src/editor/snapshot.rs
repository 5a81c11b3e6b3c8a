//! Snapshot store - the last post state known to match the server.

use std::ops::Deref;
use std::sync::Arc;

use crate::domain::{Post, PostDraft};

/// Immutable copy of the persisted title, date and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<PostDraft>);

impl Snapshot {
    pub fn new(draft: PostDraft) -> Self {
        Self(Arc::new(draft))
    }
}

impl Deref for Snapshot {
    type Target = PostDraft;

    fn deref(&self) -> &PostDraft {
        &self.0
    }
}

/// Holds the current snapshot, or nothing for a post that was never created.
///
/// The snapshot is only ever replaced as a whole.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    current: Option<Snapshot>,
}

impl SnapshotStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_post(post: &Post) -> Self {
        Self {
            current: Some(Snapshot::new(post.draft())),
        }
    }

    pub fn get(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn replace(&mut self, draft: PostDraft) {
        self.current = Some(Snapshot::new(draft));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PostId, parse_datetime};

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            date: parse_datetime("2024-01-01").unwrap(),
            content: "World".to_string(),
        }
    }

    #[test]
    fn test_replace_does_not_alter_previous_handle() {
        let mut store = SnapshotStore::from_post(&Post::new(PostId(1), draft("old")));
        let before = store.get().cloned().unwrap();

        store.replace(draft("new"));

        assert_eq!(before.title, "old");
        assert_eq!(store.get().unwrap().title, "new");
    }

    #[test]
    fn test_empty_store() {
        assert!(SnapshotStore::empty().get().is_none());
    }
}
