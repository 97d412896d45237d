//! Axum router construction.
//!
//! Assembles the pages and JSON routes into a single [`Router`] with CORS
//! and request tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::pages;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- student registration page
/// - `GET /admin` -- instructor console
/// - `POST /add_student` -- register a student
/// - `GET /pick_student` -- pick a random unselected student
/// - `GET /students` -- roster
/// - `GET /report` -- selection history
/// - `POST /reset` -- start a new session
/// - `GET /health` -- liveness and backend reachability
///
/// CORS allows any origin; the service trusts all callers.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/admin", get(pages::admin))
        // JSON API
        .route("/add_student", post(handlers::add_student))
        .route("/pick_student", get(handlers::pick_student))
        .route("/students", get(handlers::list_students))
        .route("/report", get(handlers::report))
        .route("/reset", post(handlers::reset))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
