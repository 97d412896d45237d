//! Data layer for the Rollcall classroom picker.
//!
//! Two tables hold all state: `students` (the roster and each student's
//! selection flag) and `selection_log` (one append-only row per pick).
//! This crate owns the schema, the queries, and an in-memory backend with
//! the same semantics.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler
//!     |
//!     +-- Roster (enum dispatch)
//!         |-- Postgres(PostgresPool)
//!         |     |-- StudentStore       (register, list, pick, reset)
//!         |     +-- SelectionLogStore  (report; append/clear inside pick/reset)
//!         +-- Memory(MemoryRoster)
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool, configuration, migrations
//! - [`student_store`] -- Roster queries and the pick/reset transactions
//! - [`selection_store`] -- Selection history queries
//! - [`memory`] -- Process-local backend
//! - [`roster`] -- Backend dispatch used by the HTTP layer
//! - [`error`] -- Shared error types

mod draw;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod roster;
pub mod selection_store;
pub mod student_store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use memory::MemoryRoster;
pub use postgres::{PostgresConfig, PostgresPool};
pub use roster::Roster;
pub use selection_store::{SelectionLogStore, SelectionRow};
pub use student_store::{StudentRow, StudentStore};
