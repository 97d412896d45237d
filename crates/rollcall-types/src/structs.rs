//! Core domain structs: roster entries, selection events, and the results
//! of the mutating roster operations.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered student as it appears on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    /// Unique, case-sensitive display name.
    pub name: String,
    /// Whether the student has already been picked this session.
    pub is_selected: bool,
}

/// An immutable record of one completed pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    /// Name of the picked student (denormalized from the roster).
    pub name: String,
    /// When the pick was committed.
    pub selected_at: DateTime<Utc>,
}

/// Result of asking the roster for a random unselected student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A student was picked, flagged, and logged.
    Selected(String),
    /// Every registered student has already been picked. Nothing changed.
    Exhausted,
}

impl PickOutcome {
    /// The picked name, if any.
    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Selected(name) => Some(name.as_str()),
            Self::Exhausted => None,
        }
    }
}

/// Counts reported by a session reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetSummary {
    /// Students whose selection flag was cleared.
    pub students_cleared: u64,
    /// Selection log entries deleted.
    pub log_entries_removed: u64,
}
