//! Selection log operations.
//!
//! The `selection_log` table is append-only within a session. Rows are only
//! written by a pick (inside the pick's transaction) and only removed by a
//! session reset.

use chrono::{DateTime, Utc};
use rollcall_types::SelectionEvent;
use sqlx::{PgConnection, PgPool};

use crate::error::DbError;

/// Operations on the `selection_log` table.
pub struct SelectionLogStore<'a> {
    pool: &'a PgPool,
}

impl<'a> SelectionLogStore<'a> {
    /// Create a new selection log store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Return the full selection history, oldest pick first.
    ///
    /// Entries come back in insertion order. Log ids are assigned after the
    /// pick holds its roster row locks, so id order is commit order and the
    /// insert-time timestamps never decrease along it.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self) -> Result<Vec<SelectionEvent>, DbError> {
        let rows = sqlx::query_as::<_, SelectionRow>(
            r"SELECT name, selected_at
              FROM selection_log
              ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Loaded selection log");
        Ok(rows.into_iter().map(SelectionRow::into_event).collect())
    }
}

/// Append one entry for `name`. The timestamp is assigned by the store.
///
/// Runs on the caller's connection so it commits or rolls back with the
/// roster update that produced it.
pub(crate) async fn append(conn: &mut PgConnection, name: &str) -> Result<(), DbError> {
    sqlx::query("INSERT INTO selection_log (name) VALUES ($1)")
        .bind(name)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Delete every entry, returning how many were removed.
pub(crate) async fn clear(conn: &mut PgConnection) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM selection_log")
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

/// A row from the `selection_log` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SelectionRow {
    /// Name of the picked student.
    pub name: String,
    /// Commit timestamp assigned by `PostgreSQL`.
    pub selected_at: DateTime<Utc>,
}

impl SelectionRow {
    /// Project the row into the shared [`SelectionEvent`] type.
    pub fn into_event(self) -> SelectionEvent {
        SelectionEvent {
            name: self.name,
            selected_at: self.selected_at,
        }
    }
}
