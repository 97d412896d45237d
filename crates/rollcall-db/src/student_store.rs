//! Student roster operations.
//!
//! Every mutating operation is a single transaction. A pick locks the
//! unselected rows it draws from, so two concurrent picks can never choose
//! the same student.

use rollcall_types::{PickOutcome, ResetSummary, Student, StudentName};
use sqlx::PgPool;

use crate::draw::draw_one;
use crate::error::DbError;
use crate::selection_store;

/// Operations on the `students` table.
pub struct StudentStore<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentStore<'a> {
    /// Create a new student store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a new, unselected student.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::DuplicateName`] if the name is already taken.
    /// Returns [`DbError::Postgres`] for any other failure.
    pub async fn register(&self, name: &StudentName) -> Result<(), DbError> {
        sqlx::query("INSERT INTO students (name) VALUES ($1)")
            .bind(name.as_str())
            .execute(self.pool)
            .await
            .map_err(|e| DbError::from_insert(e, name.as_str()))?;

        tracing::info!(name = %name, "Student registered");
        Ok(())
    }

    /// List the roster ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r"SELECT name, is_selected
              FROM students
              ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Loaded roster");
        Ok(rows.into_iter().map(StudentRow::into_student).collect())
    }

    /// Pick one unselected student uniformly at random.
    ///
    /// The flag flip and the selection log append commit together. When no
    /// unselected student remains the transaction is rolled back untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if any statement or the commit fails.
    pub async fn pick(&self) -> Result<PickOutcome, DbError> {
        let mut tx = self.pool.begin().await?;

        let candidates: Vec<String> = sqlx::query_scalar(
            r"SELECT name
              FROM students
              WHERE is_selected = FALSE
              ORDER BY id
              FOR UPDATE",
        )
        .fetch_all(&mut *tx)
        .await?;

        let Some(chosen) = draw_one(&candidates).cloned() else {
            tx.rollback().await?;
            tracing::info!("Pick requested with no unselected students left");
            return Ok(PickOutcome::Exhausted);
        };

        sqlx::query("UPDATE students SET is_selected = TRUE WHERE name = $1")
            .bind(&chosen)
            .execute(&mut *tx)
            .await?;

        selection_store::append(&mut tx, &chosen).await?;

        tx.commit().await?;

        tracing::info!(
            name = %chosen,
            remaining = candidates.len().saturating_sub(1),
            "Student picked"
        );
        Ok(PickOutcome::Selected(chosen))
    }

    /// Start a new session: clear every selection flag and empty the log.
    ///
    /// Registered students are kept.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if any statement or the commit fails.
    pub async fn reset(&self) -> Result<ResetSummary, DbError> {
        let mut tx = self.pool.begin().await?;

        let cleared = sqlx::query("UPDATE students SET is_selected = FALSE WHERE is_selected")
            .execute(&mut *tx)
            .await?;

        let removed = selection_store::clear(&mut tx).await?;

        tx.commit().await?;

        let summary = ResetSummary {
            students_cleared: cleared.rows_affected(),
            log_entries_removed: removed,
        };
        tracing::info!(
            students_cleared = summary.students_cleared,
            log_entries_removed = summary.log_entries_removed,
            "Session reset"
        );
        Ok(summary)
    }
}

/// A row from the `students` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentRow {
    /// Unique student name.
    pub name: String,
    /// Whether the student was picked this session.
    pub is_selected: bool,
}

impl StudentRow {
    /// Project the row into the shared [`Student`] type.
    pub fn into_student(self) -> Student {
        Student {
            name: self.name,
            is_selected: self.is_selected,
        }
    }
}
