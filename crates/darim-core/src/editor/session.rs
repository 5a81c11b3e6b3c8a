//! Editing session - the save-status state machine.
//!
//! The session owns the field set, snapshot, identity, save status and view
//! mode. It never performs I/O: [`EditorSession::attempt_save`] and
//! [`EditorSession::retry`] hand back a [`Dispatch`] describing the persist
//! call, and the caller reports the result through [`EditorSession::settle`].
//!
//! At most one dispatch is in flight. Save attempts made meanwhile are merged
//! into a pending set and evaluated again once the in-flight call settles.

use chrono::NaiveDate;
use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::{Post, PostId};
use crate::error::EditorError;

use super::diff;
use super::fields::{Candidates, Field, PostFields};
use super::identity::{IdentityResolver, PersistRequest};
use super::snapshot::{Snapshot, SnapshotStore};
use super::status::{SaveEvent, SaveStatus};
use super::view_mode::ViewMode;

/// A persist call the caller must perform, tagged with its attempt sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub seq: u64,
    pub request: PersistRequest,
}

/// Result of a persist call as reported back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Created(PostId),
    Updated,
    Failed,
}

/// Why a save attempt did not dispatch anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Existing post and no candidate differs from the snapshot.
    Clean,
    /// New post with an empty title, date or content.
    Incomplete,
    /// The date field cannot be parsed.
    InvalidDate,
    /// The post was deleted.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDecision {
    Dispatch(Dispatch),
    /// Merged into the pending save behind the in-flight one.
    Coalesced,
    Skipped(SkipReason),
}

/// Observable session state, published after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    pub status: SaveStatus,
    pub view_mode: ViewMode,
    pub post_id: Option<PostId>,
    pub can_retry: bool,
    pub closed: bool,
}

#[derive(Debug, Clone)]
struct InFlight {
    seq: u64,
    request: PersistRequest,
}

pub struct EditorSession {
    id: Uuid,
    fields: PostFields,
    snapshot: SnapshotStore,
    identity: IdentityResolver,
    status: SaveStatus,
    view_mode: ViewMode,
    next_seq: u64,
    last_settled: u64,
    in_flight: Option<InFlight>,
    pending: Option<Candidates>,
    last_attempt: Option<PersistRequest>,
    closed: bool,
    state: watch::Sender<EditorState>,
}

impl EditorSession {
    /// Session for a post that does not exist yet.
    pub fn new_post(today: NaiveDate) -> Self {
        Self::build(
            PostFields::blank(today),
            SnapshotStore::empty(),
            IdentityResolver::default(),
        )
    }

    /// Session for a post loaded from the server.
    pub fn from_post(post: &Post) -> Self {
        Self::build(
            PostFields::from_post(post),
            SnapshotStore::from_post(post),
            IdentityResolver::new(Some(post.id)),
        )
    }

    fn build(fields: PostFields, snapshot: SnapshotStore, identity: IdentityResolver) -> Self {
        let view_mode = ViewMode::initial(identity.has_identity());
        let initial = EditorState {
            status: SaveStatus::None,
            view_mode,
            post_id: identity.id(),
            can_retry: false,
            closed: false,
        };
        let (state, _) = watch::channel(initial);
        let id = Uuid::new_v4();

        tracing::debug!(session = %id, post_id = ?identity.id(), "Editing session started");

        Self {
            id,
            fields,
            snapshot,
            identity,
            status: SaveStatus::None,
            view_mode,
            next_seq: 0,
            last_settled: 0,
            in_flight: None,
            pending: None,
            last_attempt: None,
            closed: false,
            state,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn fields(&self) -> &PostFields {
        &self.fields
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.get()
    }

    pub fn post_id(&self) -> Option<PostId> {
        self.identity.id()
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn in_flight_seq(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|f| f.seq)
    }

    /// The request a retry would send again.
    pub fn last_attempt(&self) -> Option<&PersistRequest> {
        self.last_attempt.as_ref()
    }

    pub fn state(&self) -> EditorState {
        EditorState {
            status: self.status,
            view_mode: self.view_mode,
            post_id: self.identity.id(),
            can_retry: self.can_retry(),
            closed: self.closed,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<EditorState> {
        self.state.subscribe()
    }

    /// Live edit of a field. Nothing is persisted until the field blurs.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if !self.closed {
            self.fields.set(field, value);
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.closed || self.view_mode == mode {
            return;
        }
        self.view_mode = mode;
        self.publish();
    }

    pub fn toggle_view(&mut self) {
        self.set_view_mode(self.view_mode.toggled());
    }

    /// Decide whether the candidates warrant a persist call.
    ///
    /// Candidates are written into the field set first, so the request always
    /// carries the latest value of every field.
    pub fn attempt_save(&mut self, candidates: Candidates) -> SaveDecision {
        if self.closed {
            return SaveDecision::Skipped(SkipReason::Closed);
        }

        candidates.apply_to(&mut self.fields);

        if let Some(in_flight) = &self.in_flight {
            tracing::debug!(
                session = %self.id,
                in_flight = in_flight.seq,
                "Save in flight, coalescing attempt"
            );
            self.pending
                .get_or_insert_with(Candidates::default)
                .merge(candidates);
            return SaveDecision::Coalesced;
        }

        self.evaluate(&candidates)
    }

    /// Send the last attempted values again after a failure.
    pub fn retry(&mut self) -> Result<Dispatch, EditorError> {
        if self.closed {
            return Err(EditorError::SessionClosed);
        }
        if !self.can_retry() {
            return Err(EditorError::RetryUnavailable);
        }
        let request = self
            .last_attempt
            .clone()
            .ok_or(EditorError::RetryUnavailable)?;

        tracing::info!(session = %self.id, kind = ?request.kind(), "Retrying save");
        Ok(self.dispatch(request))
    }

    /// Apply the result of a dispatched call.
    ///
    /// Returns the next dispatch when coalesced edits are waiting and still
    /// warrant a save. Responses for anything but the in-flight sequence are
    /// ignored.
    pub fn settle(&mut self, seq: u64, outcome: PersistOutcome) -> Option<Dispatch> {
        if self.closed {
            tracing::debug!(session = %self.id, seq, "Ignoring response for closed session");
            return None;
        }

        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.seq == seq => in_flight,
            other => {
                tracing::warn!(
                    session = %self.id,
                    seq,
                    in_flight = ?other.as_ref().map(|f| f.seq),
                    last_settled = self.last_settled,
                    "Ignoring stale save response"
                );
                self.in_flight = other;
                return None;
            }
        };
        self.last_settled = seq;

        let succeeded = match (in_flight.request, outcome) {
            (PersistRequest::Create(draft), PersistOutcome::Created(id)) => {
                self.identity.capture(id);
                self.snapshot.replace(draft);
                tracing::info!(session = %self.id, post_id = %id, "Post created");
                true
            }
            (PersistRequest::Update(id, draft), PersistOutcome::Updated) => {
                self.snapshot.replace(draft);
                tracing::debug!(session = %self.id, post_id = %id, "Post updated");
                true
            }
            (_, PersistOutcome::Failed) => false,
            (request, outcome) => {
                tracing::warn!(
                    session = %self.id,
                    kind = ?request.kind(),
                    ?outcome,
                    "Response does not match request"
                );
                false
            }
        };

        self.transition(if succeeded {
            SaveEvent::Succeeded
        } else {
            SaveEvent::Failed
        });
        self.publish();

        let pending = self.pending.take()?;
        match self.evaluate(&pending) {
            SaveDecision::Dispatch(next) => Some(next),
            _ => None,
        }
    }

    /// End the session after the post was deleted.
    ///
    /// A save still in flight is abandoned: its response will be ignored.
    pub fn close(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::debug!(session = %self.id, seq = in_flight.seq, "Abandoning save in flight");
            self.transition(SaveEvent::Abandoned);
        }
        self.closed = true;
        self.pending = None;
        tracing::info!(session = %self.id, post_id = ?self.identity.id(), "Editing session closed");
        self.publish();
    }

    pub fn delete_target(&self) -> Result<PostId, EditorError> {
        if self.closed {
            return Err(EditorError::SessionClosed);
        }
        self.identity.delete_target()
    }

    fn can_retry(&self) -> bool {
        !self.closed && self.in_flight.is_none() && self.status.can_retry()
    }

    fn evaluate(&mut self, candidates: &Candidates) -> SaveDecision {
        if self.identity.has_identity() {
            if let Some(snapshot) = self.snapshot.get() {
                let dirty = diff::dirty_fields(candidates, snapshot);
                if dirty.is_empty() {
                    tracing::debug!(session = %self.id, "No field changed, skipping save");
                    return SaveDecision::Skipped(SkipReason::Clean);
                }
                tracing::debug!(
                    session = %self.id,
                    fields = ?dirty.iter().map(|f| f.name()).collect::<Vec<_>>(),
                    "Fields changed"
                );
            }
        } else if !self.fields.is_complete() {
            tracing::debug!(session = %self.id, "New post incomplete, skipping create");
            return SaveDecision::Skipped(SkipReason::Incomplete);
        }

        match self.identity.resolve(&self.fields, self.snapshot.get()) {
            Ok(request) => SaveDecision::Dispatch(self.dispatch(request)),
            Err(e) => {
                tracing::debug!(session = %self.id, error = %e, "Skipping save");
                SaveDecision::Skipped(SkipReason::InvalidDate)
            }
        }
    }

    fn dispatch(&mut self, request: PersistRequest) -> Dispatch {
        self.next_seq += 1;
        let seq = self.next_seq;

        self.transition(SaveEvent::Dispatched);
        self.in_flight = Some(InFlight {
            seq,
            request: request.clone(),
        });
        self.last_attempt = Some(request.clone());

        tracing::debug!(session = %self.id, seq, kind = ?request.kind(), "Dispatching save");
        self.publish();

        Dispatch { seq, request }
    }

    fn transition(&mut self, event: SaveEvent) {
        match self.status.on(event) {
            Some(next) => {
                tracing::debug!(session = %self.id, from = ?self.status, to = ?next, "Save status changed");
                self.status = next;
            }
            None => {
                tracing::warn!(session = %self.id, status = ?self.status, ?event, "Invalid save transition");
            }
        }
    }

    fn publish(&self) {
        self.state.send_replace(self.state());
    }
}
