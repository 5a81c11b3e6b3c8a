//! # Darim Core
//!
//! The domain layer of the Darim post editor.
//! This crate owns the editing session and its save orchestration; every
//! network or rendering concern is reached through the ports in [`ports`].

pub mod domain;
pub mod editor;
pub mod error;
pub mod ports;

pub use editor::{PostEditor, SaveStatus, ViewMode};
pub use error::{ApiError, DateError, EditorError};
