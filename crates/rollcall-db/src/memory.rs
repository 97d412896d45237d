//! Process-local roster backend.
//!
//! Mirrors the `PostgreSQL` backend's behavior without a database: names are
//! unique, a pick flips one flag and appends one log entry under a single
//! write lock, and a reset clears flags and the log but keeps students.
//! State is lost when the process exits.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use rollcall_types::{PickOutcome, ResetSummary, SelectionEvent, Student, StudentName};
use tokio::sync::RwLock;

use crate::draw::draw_one;
use crate::error::DbError;

#[derive(Debug, Default)]
struct MemoryState {
    /// Selection flag keyed by name; ordered so listing needs no sort.
    students: BTreeMap<String, bool>,
    log: Vec<SelectionEvent>,
}

/// In-memory roster shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoster {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, unselected student.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::DuplicateName`] if the name is already taken.
    pub async fn register(&self, name: &StudentName) -> Result<(), DbError> {
        let mut state = self.state.write().await;
        if state.students.contains_key(name.as_str()) {
            return Err(DbError::DuplicateName(name.as_str().to_owned()));
        }
        state.students.insert(name.as_str().to_owned(), false);
        drop(state);

        tracing::info!(name = %name, "Student registered");
        Ok(())
    }

    /// List the roster ordered by name.
    pub async fn list(&self) -> Vec<Student> {
        let state = self.state.read().await;
        state
            .students
            .iter()
            .map(|(name, &is_selected)| Student {
                name: name.clone(),
                is_selected,
            })
            .collect()
    }

    /// Pick one unselected student uniformly at random.
    pub async fn pick(&self) -> PickOutcome {
        let mut state = self.state.write().await;

        let candidates: Vec<String> = state
            .students
            .iter()
            .filter(|(_, selected)| !**selected)
            .map(|(name, _)| name.clone())
            .collect();

        let Some(chosen) = draw_one(&candidates).cloned() else {
            tracing::info!("Pick requested with no unselected students left");
            return PickOutcome::Exhausted;
        };

        if let Some(flag) = state.students.get_mut(&chosen) {
            *flag = true;
        }

        // Keep the log non-decreasing even if the wall clock steps back.
        let now = Utc::now();
        let selected_at = state
            .log
            .last()
            .map_or(now, |last| last.selected_at.max(now));
        state.log.push(SelectionEvent {
            name: chosen.clone(),
            selected_at,
        });
        drop(state);

        tracing::info!(
            name = %chosen,
            remaining = candidates.len().saturating_sub(1),
            "Student picked"
        );
        PickOutcome::Selected(chosen)
    }

    /// Return the selection history, oldest pick first.
    pub async fn report(&self) -> Vec<SelectionEvent> {
        self.state.read().await.log.clone()
    }

    /// Clear every selection flag and empty the log. Students are kept.
    pub async fn reset(&self) -> ResetSummary {
        let mut state = self.state.write().await;

        let mut cleared: u64 = 0;
        for flag in state.students.values_mut().filter(|flag| **flag) {
            *flag = false;
            cleared = cleared.saturating_add(1);
        }
        let removed = u64::try_from(state.log.len()).unwrap_or(u64::MAX);
        state.log.clear();
        drop(state);

        let summary = ResetSummary {
            students_cleared: cleared,
            log_entries_removed: removed,
        };
        tracing::info!(
            students_cleared = summary.students_cleared,
            log_entries_removed = summary.log_entries_removed,
            "Session reset"
        );
        summary
    }
}
