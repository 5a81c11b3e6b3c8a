//! Async driver that connects an [`EditorSession`] to the post API.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

use crate::domain::{Credential, PostDraft, PostId};
use crate::error::{ApiError, EditorError};
use crate::ports::{Confirm, PostApi, PreviewRenderer};

use super::fields::{Candidates, Field, PostFields};
use super::identity::PersistRequest;
use super::session::{Dispatch, EditorSession, EditorState, PersistOutcome, SaveDecision, SkipReason};
use super::status::SaveStatus;
use super::view_mode::{self, ViewFrame, ViewMode};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

/// What became of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveReport {
    Skipped(SkipReason),
    /// Folded into the save already in flight.
    Coalesced,
    /// The status once every call this attempt triggered has settled.
    Settled(SaveStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation.
    Aborted,
    Deleted,
    Failed,
}

/// Post editor for one editing session.
///
/// The session lock is never held across a network call, so blurs that
/// arrive while a save is in flight are coalesced instead of queued on the lock.
pub struct PostEditor {
    api: Arc<dyn PostApi>,
    credential: Credential,
    session: Mutex<EditorSession>,
}

impl PostEditor {
    /// Start editing a new post dated today.
    pub fn new_post(api: Arc<dyn PostApi>, credential: Credential) -> Self {
        Self::with_session(
            api,
            credential,
            EditorSession::new_post(Local::now().date_naive()),
        )
    }

    /// Load an existing post for editing.
    pub async fn open(
        api: Arc<dyn PostApi>,
        credential: Credential,
        id: PostId,
    ) -> Result<Self, ApiError> {
        let post = api
            .fetch_post(&credential, id)
            .await?
            .ok_or(ApiError::NotFound(id))?;

        tracing::info!(post_id = %id, "Post loaded for editing");

        Ok(Self::with_session(
            api,
            credential,
            EditorSession::from_post(&post),
        ))
    }

    pub fn with_session(
        api: Arc<dyn PostApi>,
        credential: Credential,
        session: EditorSession,
    ) -> Self {
        Self {
            api,
            credential,
            session: Mutex::new(session),
        }
    }

    /// Keystroke-level edit; does not save.
    pub async fn edit(&self, field: Field, value: impl Into<String>) {
        self.session.lock().await.edit(field, value);
    }

    /// A field lost focus with `value`.
    pub async fn blur(&self, field: Field, value: impl Into<String>) -> SaveReport {
        self.attempt_save(Candidates::single(field, value)).await
    }

    pub async fn attempt_save(&self, candidates: Candidates) -> SaveReport {
        let decision = self.session.lock().await.attempt_save(candidates);
        self.report(decision).await
    }

    /// Decide on the save now and drive any resulting calls in the background.
    ///
    /// Attempts are ordered by when this is called, not by when the task runs.
    pub async fn spawn_save(self: &Arc<Self>, candidates: Candidates) -> JoinHandle<SaveReport> {
        let decision = self.session.lock().await.attempt_save(candidates);
        let editor = Arc::clone(self);
        tokio::spawn(async move { editor.report(decision).await })
    }

    /// Re-send the last attempted values after a failure.
    pub async fn retry(&self) -> Result<SaveStatus, EditorError> {
        let dispatch = self.session.lock().await.retry()?;
        self.drive(dispatch).await
    }

    /// Delete the post after the user confirms. A successful delete closes the session.
    pub async fn delete(&self, confirm: &dyn Confirm) -> Result<DeleteOutcome, EditorError> {
        let id = self.session.lock().await.delete_target()?;

        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(post_id = %id, "Delete declined");
            return Ok(DeleteOutcome::Aborted);
        }

        match self.api.delete_post(id).await {
            Ok(true) => {
                self.session.lock().await.close();
                tracing::info!(post_id = %id, "Post deleted");
                Ok(DeleteOutcome::Deleted)
            }
            Ok(false) => {
                tracing::warn!(post_id = %id, "Server refused to delete post");
                Ok(DeleteOutcome::Failed)
            }
            Err(e) => {
                tracing::warn!(post_id = %id, error = %e, "Failed to delete post");
                Ok(DeleteOutcome::Failed)
            }
        }
    }

    pub async fn set_view_mode(&self, mode: ViewMode) {
        self.session.lock().await.set_view_mode(mode);
    }

    pub async fn toggle_view(&self) -> ViewMode {
        let mut session = self.session.lock().await;
        session.toggle_view();
        session.view_mode()
    }

    pub async fn frame(&self, renderer: &dyn PreviewRenderer) -> ViewFrame {
        let session = self.session.lock().await;
        view_mode::frame(session.view_mode(), session.fields(), renderer)
    }

    pub async fn fields(&self) -> PostFields {
        self.session.lock().await.fields().clone()
    }

    pub async fn snapshot(&self) -> Option<PostDraft> {
        self.session
            .lock()
            .await
            .snapshot()
            .map(|snapshot| PostDraft::clone(snapshot))
    }

    pub async fn state(&self) -> EditorState {
        self.session.lock().await.state()
    }

    pub async fn status(&self) -> SaveStatus {
        self.session.lock().await.status()
    }

    pub async fn post_id(&self) -> Option<PostId> {
        self.session.lock().await.post_id()
    }

    pub async fn subscribe(&self) -> watch::Receiver<EditorState> {
        self.session.lock().await.subscribe()
    }

    async fn report(&self, decision: SaveDecision) -> SaveReport {
        match decision {
            SaveDecision::Dispatch(dispatch) => match self.drive(dispatch).await {
                Ok(status) => SaveReport::Settled(status),
                Err(_) => SaveReport::Skipped(SkipReason::Closed),
            },
            SaveDecision::Coalesced => SaveReport::Coalesced,
            SaveDecision::Skipped(reason) => SaveReport::Skipped(reason),
        }
    }

    /// Perform dispatches until nothing is pending.
    ///
    /// Fails with `SessionClosed` when the post was deleted before the calls settled.
    async fn drive(&self, first: Dispatch) -> Result<SaveStatus, EditorError> {
        let mut next = Some(first);

        while let Some(dispatch) = next {
            let outcome = self.persist(&dispatch.request).await;
            next = self.session.lock().await.settle(dispatch.seq, outcome);
        }

        let session = self.session.lock().await;
        if session.is_closed() {
            return Err(EditorError::SessionClosed);
        }
        Ok(session.status())
    }

    async fn persist(&self, request: &PersistRequest) -> PersistOutcome {
        match request {
            PersistRequest::Create(draft) => {
                match self.api.create_post(&self.credential, draft).await {
                    Ok(Some(id)) => PersistOutcome::Created(id),
                    Ok(None) => {
                        tracing::warn!("Create returned no post id");
                        PersistOutcome::Failed
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to create post");
                        PersistOutcome::Failed
                    }
                }
            }
            PersistRequest::Update(id, draft) => {
                match self.api.update_post(&self.credential, *id, draft).await {
                    Ok(true) => PersistOutcome::Updated,
                    Ok(false) => {
                        tracing::warn!(post_id = %id, "Server refused to update post");
                        PersistOutcome::Failed
                    }
                    Err(e) => {
                        tracing::warn!(post_id = %id, error = %e, "Failed to update post");
                        PersistOutcome::Failed
                    }
                }
            }
        }
    }
}
