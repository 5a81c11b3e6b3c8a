//! Save status lifecycle.

/// Progress of the most recent save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    /// No save attempted yet.
    #[default]
    None,
    /// A persist call is in flight.
    Ongoing,
    /// The last persist call succeeded.
    Success,
    /// The last persist call failed; retry is available.
    Failure,
}

/// Events that move the save status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveEvent {
    Dispatched,
    Succeeded,
    Failed,
    /// The post was deleted while a call was in flight.
    Abandoned,
}

impl SaveStatus {
    /// Apply an event. Returns `None` for a transition the lifecycle does not allow.
    pub fn on(self, event: SaveEvent) -> Option<SaveStatus> {
        match (self, event) {
            (SaveStatus::Ongoing, SaveEvent::Dispatched) => None,
            (_, SaveEvent::Dispatched) => Some(SaveStatus::Ongoing),
            (SaveStatus::Ongoing, SaveEvent::Succeeded) => Some(SaveStatus::Success),
            (SaveStatus::Ongoing, SaveEvent::Failed) => Some(SaveStatus::Failure),
            (SaveStatus::Ongoing, SaveEvent::Abandoned) => Some(SaveStatus::None),
            _ => None,
        }
    }

    pub fn is_ongoing(self) -> bool {
        self == SaveStatus::Ongoing
    }

    pub fn can_retry(self) -> bool {
        self == SaveStatus::Failure
    }

    /// Short label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            SaveStatus::None => "",
            SaveStatus::Ongoing => "Saving...",
            SaveStatus::Success => "Saved",
            SaveStatus::Failure => "Failed to save",
        }
    }
}
