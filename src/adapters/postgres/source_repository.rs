//! PostgreSQL implementation of SourceRepository.
//!
//! The `sources_one_per_type` constraint is the authority on
//! one-source-per-type; a lost race shows up as zero inserted rows.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, SessionId, SourceId, Timestamp};
use crate::domain::source::{Source, SourceType};
use crate::ports::{SaveResult, SourceRepository};

use super::{column, db_error, parse_column};

/// PostgreSQL implementation of SourceRepository.
#[derive(Clone)]
pub struct PostgresSourceRepository {
    pool: PgPool,
}

impl PostgresSourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SourceRepository for PostgresSourceRepository {
    async fn insert(&self, source: &Source) -> Result<SaveResult, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO sources (id, session_id, type, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(source.id().as_str())
        .bind(source.session_id().as_uuid())
        .bind(source.source_type().as_str())
        .bind(source.name())
        .bind(source.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert source"))?;

        if result.rows_affected() == 0 {
            return Ok(SaveResult::AlreadyExists);
        }
        Ok(SaveResult::Inserted)
    }

    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Source>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, type, name, created_at
            FROM sources
            WHERE session_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch sources"))?;

        rows.into_iter().map(row_to_source).collect()
    }
}

fn row_to_source(row: PgRow) -> Result<Source, DomainError> {
    let id: String = column(&row, "id")?;
    let session_id: uuid::Uuid = column(&row, "session_id")?;
    let source_type: String = column(&row, "type")?;
    let name: String = column(&row, "name")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    let id = SourceId::new(id)
        .ok_or_else(|| DomainError::storage_failure("Stored source has an empty id"))?;

    Ok(Source::reconstitute(
        id,
        SessionId::from_uuid(session_id),
        parse_column::<SourceType>(&source_type, "type")?,
        name,
        Timestamp::from_datetime(created_at),
    ))
}
