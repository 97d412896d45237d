//! Shared application state for the HTTP server.
//!
//! [`AppState`] holds the [`Roster`] every handler talks to. The roster
//! itself is cheap to clone (a pool handle or an `Arc`), but the state is
//! still wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
//! extractor so new fields can be added without touching handler
//! signatures.

use rollcall_db::Roster;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Storage backend for students and the selection log.
    pub roster: Roster,
}

impl AppState {
    /// Create application state around an existing roster.
    pub const fn new(roster: Roster) -> Self {
        Self { roster }
    }

    /// Create application state backed by an empty in-memory roster.
    pub fn in_memory() -> Self {
        Self::new(Roster::in_memory())
    }
}
