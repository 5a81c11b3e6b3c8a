//! Identity resolver - chooses between create and update.

use crate::domain::{PostDraft, PostId, midnight, parse_date};
use crate::error::{DateError, EditorError};

use super::fields::PostFields;
use super::snapshot::Snapshot;

/// Which persist call a request maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistKind {
    Create,
    Update,
}

/// A persist call ready to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistRequest {
    Create(PostDraft),
    Update(PostId, PostDraft),
}

impl PersistRequest {
    pub fn kind(&self) -> PersistKind {
        match self {
            PersistRequest::Create(_) => PersistKind::Create,
            PersistRequest::Update(..) => PersistKind::Update,
        }
    }

    pub fn draft(&self) -> &PostDraft {
        match self {
            PersistRequest::Create(draft) | PersistRequest::Update(_, draft) => draft,
        }
    }
}

/// Tracks the post identity for one editing session.
///
/// Once captured, the identity never changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver {
    id: Option<PostId>,
}

impl IdentityResolver {
    pub fn new(id: Option<PostId>) -> Self {
        Self { id }
    }

    pub fn id(&self) -> Option<PostId> {
        self.id
    }

    pub fn has_identity(&self) -> bool {
        self.id.is_some()
    }

    /// Build the request for the current field values.
    pub fn resolve(
        &self,
        fields: &PostFields,
        snapshot: Option<&Snapshot>,
    ) -> Result<PersistRequest, DateError> {
        let date = match (canonical_datetime(&fields.date, snapshot), self.id, snapshot) {
            (Ok(date), _, _) => date,
            // An existing post keeps its stored date until a valid one is entered.
            (Err(e), Some(id), Some(snapshot)) => {
                tracing::debug!(post_id = %id, error = %e, "Keeping stored date");
                snapshot.date
            }
            (Err(e), _, _) => return Err(e),
        };

        let draft = PostDraft {
            title: fields.title.clone(),
            date,
            content: fields.content.clone(),
        };

        Ok(match self.id {
            Some(id) => PersistRequest::Update(id, draft),
            None => PersistRequest::Create(draft),
        })
    }

    /// Record the identity returned by a successful create.
    ///
    /// Returns false and keeps the existing identity if one was already captured.
    pub fn capture(&mut self, id: PostId) -> bool {
        match self.id {
            Some(existing) => {
                tracing::warn!(
                    post_id = %existing,
                    ignored = %id,
                    "Post identity already assigned"
                );
                false
            }
            None => {
                self.id = Some(id);
                true
            }
        }
    }

    /// The identity to delete, once the post exists.
    pub fn delete_target(&self) -> Result<PostId, EditorError> {
        self.id.ok_or(EditorError::NoIdentity)
    }
}

/// Canonical timestamp for the edited date.
///
/// A day the user changed is anchored at midnight. An unchanged day keeps the
/// persisted time of day.
fn canonical_datetime(
    raw: &str,
    snapshot: Option<&Snapshot>,
) -> Result<chrono::NaiveDateTime, DateError> {
    let date = parse_date(raw)?;
    Ok(match snapshot {
        Some(snapshot) if snapshot.date.date() == date => snapshot.date,
        _ => midnight(date),
    })
}
