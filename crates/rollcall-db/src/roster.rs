//! Backend-agnostic roster facade.
//!
//! Uses enum dispatch instead of trait objects because async methods are
//! not dyn-compatible in Rust. The HTTP layer only ever talks to
//! [`Roster`].

use rollcall_types::{PickOutcome, ResetSummary, SelectionEvent, Student, StudentName};

use crate::error::DbError;
use crate::memory::MemoryRoster;
use crate::postgres::PostgresPool;
use crate::selection_store::SelectionLogStore;
use crate::student_store::StudentStore;

/// A roster backed by either `PostgreSQL` or process memory.
#[derive(Debug, Clone)]
pub enum Roster {
    /// Production backend.
    Postgres(PostgresPool),
    /// Process-local backend for tests and local development.
    Memory(MemoryRoster),
}

impl Roster {
    /// Create an empty in-memory roster.
    pub fn in_memory() -> Self {
        Self::Memory(MemoryRoster::new())
    }

    /// Register a new, unselected student.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::DuplicateName`] if the name is already taken, or
    /// a storage error from the backend.
    pub async fn register(&self, name: &StudentName) -> Result<(), DbError> {
        match self {
            Self::Postgres(pg) => StudentStore::new(pg.pool()).register(name).await,
            Self::Memory(mem) => mem.register(name).await,
        }
    }

    /// List every student ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the backend.
    pub async fn list_students(&self) -> Result<Vec<Student>, DbError> {
        match self {
            Self::Postgres(pg) => StudentStore::new(pg.pool()).list().await,
            Self::Memory(mem) => Ok(mem.list().await),
        }
    }

    /// Pick one unselected student at random, flag them, and log the pick.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the backend. Exhaustion is not an
    /// error; it is reported as [`PickOutcome::Exhausted`].
    pub async fn pick(&self) -> Result<PickOutcome, DbError> {
        match self {
            Self::Postgres(pg) => StudentStore::new(pg.pool()).pick().await,
            Self::Memory(mem) => Ok(mem.pick().await),
        }
    }

    /// Return the selection history, oldest pick first.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the backend.
    pub async fn report(&self) -> Result<Vec<SelectionEvent>, DbError> {
        match self {
            Self::Postgres(pg) => SelectionLogStore::new(pg.pool()).list().await,
            Self::Memory(mem) => Ok(mem.report().await),
        }
    }

    /// Clear every selection flag and the selection log, keeping students.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the backend.
    pub async fn reset(&self) -> Result<ResetSummary, DbError> {
        match self {
            Self::Postgres(pg) => StudentStore::new(pg.pool()).reset().await,
            Self::Memory(mem) => Ok(mem.reset().await),
        }
    }

    /// Check that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the database does not answer.
    pub async fn ping(&self) -> Result<(), DbError> {
        match self {
            Self::Postgres(pg) => pg.ping().await,
            Self::Memory(_) => Ok(()),
        }
    }

    /// Human-readable backend name for logging.
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Self::Postgres(pg) = self {
            pg.close().await;
        }
    }
}

impl From<PostgresPool> for Roster {
    fn from(pool: PostgresPool) -> Self {
        Self::Postgres(pool)
    }
}

impl From<MemoryRoster> for Roster {
    fn from(roster: MemoryRoster) -> Self {
        Self::Memory(roster)
    }
}
