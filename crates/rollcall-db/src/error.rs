//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`] which wraps the underlying
//! [`sqlx`] errors and lifts the one constraint violation callers care
//! about (duplicate names) into its own variant.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A student with this name is already registered.
    #[error("name already registered: {0}")]
    DuplicateName(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// Map an insert failure on `students.name` to [`DbError::DuplicateName`]
    /// when the store reports a unique violation.
    pub(crate) fn from_insert(err: sqlx::Error, name: &str) -> Self {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Self::DuplicateName(name.to_owned())
            }
            other => Self::Postgres(other),
        }
    }
}
