//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSessionRepository` - Sessions, lookup by id or join code
//! - `PostgresSourceRepository` - Sources, one per (session, type) via UNIQUE constraint
//! - `PostgresMediaRepository` - Uploaded media segments
//! - `PostgresJobRepository` - Transcoding jobs with JSONB media payload
//!
//! The schema lives in `migrations/` and is applied at startup.

mod job_repository;
mod media_repository;
mod session_repository;
mod source_repository;

pub use job_repository::PostgresJobRepository;
pub use media_repository::PostgresMediaRepository;
pub use session_repository::PostgresSessionRepository;
pub use source_repository::PostgresSourceRepository;

use std::str::FromStr;

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::DomainError;

/// Map a driver error to a storage failure naming the failed action.
fn db_error(action: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::storage_failure(format!("Failed to {}: {}", action, e))
}

/// Read one column, reporting the column name on failure.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::storage_failure(format!("Failed to get {}: {}", name, e)))
}

/// Parse a text column holding an enum value.
fn parse_column<T>(value: &str, name: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|e| DomainError::storage_failure(format!("Invalid {}: {}", name, e)))
}
