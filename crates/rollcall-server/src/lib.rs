//! HTTP API server for the Rollcall classroom picker.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Pages**: `GET /` (student registration) and `GET /admin`
//!   (instructor console)
//! - **JSON endpoints** for registering students, picking one at random,
//!   listing the roster, reporting the selection history, and resetting
//!   the session
//! - **Health endpoint** (`GET /health`) reporting backend reachability
//!
//! # Architecture
//!
//! Every request is a straight line: extract and validate input, run one
//! [`Roster`](rollcall_db::Roster) operation, serialize the result. There
//! is no in-process shared mutable state on the `PostgreSQL` path; the
//! database's transactions and unique constraint do all coordination.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, shutdown_signal, start_server};
pub use state::AppState;
