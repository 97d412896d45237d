//! REST API endpoint handlers.
//!
//! Every handler performs at most one roster operation and answers with
//! JSON. Errors flow through [`ApiError`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/add_student` | Register a student (`{"name": ...}`) |
//! | `GET` | `/pick_student` | Pick a random unselected student |
//! | `GET` | `/students` | Roster ordered by name |
//! | `GET` | `/report` | Selection history ordered by time |
//! | `POST` | `/reset` | Start a new session |
//! | `GET` | `/health` | Liveness plus backend reachability |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use rollcall_types::{PickOutcome, SelectionEvent, Student, StudentName};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Acknowledgement for a successful registration.
pub const REGISTERED: &str = "Registered successfully";

/// Answer to a pick when every student has been selected.
pub const EXHAUSTED: &str = "All students already selected";

/// Acknowledgement for a session reset.
pub const RESET_DONE: &str = "Session reset successfully";

/// Format of the `time` field in `/report` entries.
pub const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Body of `POST /add_student`. A missing `name` counts as empty.
#[derive(Debug, Deserialize)]
pub struct AddStudentRequest {
    /// Raw name as typed by the student; trimmed before validation.
    #[serde(default)]
    pub name: String,
}

/// A plain acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable status message.
    pub message: &'static str,
}

/// Body of `GET /pick_student`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PickResponse {
    /// A student was picked.
    Selected {
        /// The picked student's name.
        selected: String,
    },
    /// Nobody is left to pick.
    Exhausted {
        /// Exhaustion notice.
        message: &'static str,
    },
}

impl From<PickOutcome> for PickResponse {
    fn from(outcome: PickOutcome) -> Self {
        match outcome {
            PickOutcome::Selected(selected) => Self::Selected { selected },
            PickOutcome::Exhausted => Self::Exhausted { message: EXHAUSTED },
        }
    }
}

/// One entry of `GET /report`.
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    /// The picked student's name.
    pub name: String,
    /// Pick time in UTC, formatted with [`REPORT_TIME_FORMAT`].
    pub time: String,
}

impl From<SelectionEvent> for ReportEntry {
    fn from(event: SelectionEvent) -> Self {
        Self {
            time: event.selected_at.format(REPORT_TIME_FORMAT).to_string(),
            name: event.name,
        }
    }
}

// ---------------------------------------------------------------------------
// POST /add_student
// ---------------------------------------------------------------------------

/// Register a student by name.
///
/// Responds `400` for an empty name, a duplicate name, or a body that is
/// not the expected JSON object.
pub async fn add_student(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddStudentRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let name = StudentName::parse(&request.name)?;

    state.roster.register(&name).await?;

    Ok(Json(MessageResponse {
        message: REGISTERED,
    }))
}

// ---------------------------------------------------------------------------
// GET /pick_student
// ---------------------------------------------------------------------------

/// Pick a random unselected student.
///
/// Exhaustion is a normal `200` answer carrying a `message` instead of a
/// `selected` name.
pub async fn pick_student(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PickResponse>, ApiError> {
    let outcome = state.roster.pick().await?;
    Ok(Json(PickResponse::from(outcome)))
}

// ---------------------------------------------------------------------------
// GET /students
// ---------------------------------------------------------------------------

/// List the roster with each student's selection flag, ordered by name.
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    Ok(Json(state.roster.list_students().await?))
}

// ---------------------------------------------------------------------------
// GET /report
// ---------------------------------------------------------------------------

/// Return the selection history, oldest pick first.
pub async fn report(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ReportEntry>>, ApiError> {
    let events = state.roster.report().await?;
    Ok(Json(events.into_iter().map(ReportEntry::from).collect()))
}

// ---------------------------------------------------------------------------
// POST /reset
// ---------------------------------------------------------------------------

/// Clear all selection flags and the selection log. Students stay
/// registered.
pub async fn reset(State(state): State<Arc<AppState>>) -> Result<Json<MessageResponse>, ApiError> {
    state.roster.reset().await?;
    Ok(Json(MessageResponse {
        message: RESET_DONE,
    }))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report liveness and whether the storage backend answers.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let backend = state.roster.backend_name();
    match state.roster.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "backend": backend,
                "version": env!("CARGO_PKG_VERSION"),
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, backend, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "backend": backend,
                    "version": env!("CARGO_PKG_VERSION"),
                })),
            )
        }
    }
}
