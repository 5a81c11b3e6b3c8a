//! The post editing component.
//!
//! [`EditorSession`] is the synchronous state machine; [`PostEditor`] drives
//! it against a [`crate::ports::PostApi`].

mod controller;
mod diff;
mod fields;
mod identity;
mod session;
mod sign_up;
mod snapshot;
mod status;
mod view_mode;


pub use controller::{DELETE_PROMPT, DeleteOutcome, PostEditor, SaveReport};
pub use diff::{dirty_fields, field_is_dirty};
pub use fields::{Candidates, Field, PostFields};
pub use identity::{IdentityResolver, PersistKind, PersistRequest};
pub use session::{
    Dispatch, EditorSession, EditorState, PersistOutcome, SaveDecision, SkipReason,
};
pub use sign_up::SignUpForm;
pub use snapshot::{Snapshot, SnapshotStore};
pub use status::{SaveEvent, SaveStatus};
pub use view_mode::{ViewFrame, ViewMode, frame};
