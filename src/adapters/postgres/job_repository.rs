//! PostgreSQL implementation of JobRepository.
//!
//! Media segments are stored as submitted, in a JSONB array.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, JobId, SessionId, Timestamp};
use crate::domain::job::{Job, JobType, JobUpdate};
use crate::ports::JobRepository;

use super::{column, db_error, parse_column};

const JOB_COLUMNS: &str = "id, session_id, type, media, status, created_at, updated_at";

/// PostgreSQL implementation of JobRepository.
#[derive(Clone)]
pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn save(&self, job: &Job) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, session_id, type, media, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(job.id().as_uuid())
        .bind(job.session_id().as_uuid())
        .bind(job.job_type().as_str())
        .bind(Json(job.media()))
        .bind(job.status())
        .bind(job.created_at().as_datetime())
        .bind(job.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert job"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch job"))?;

        row.map(row_to_job).transpose()
    }

    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Job>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM jobs WHERE session_id = $1",
            JOB_COLUMNS
        ))
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch jobs"))?;

        rows.into_iter().map(row_to_job).collect()
    }

    async fn update(&self, id: &JobId, update: &JobUpdate) -> Result<Option<Job>, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE jobs SET
                status = COALESCE($2, status),
                updated_at = CASE WHEN $2 IS NULL THEN updated_at ELSE $3 END
            WHERE id = $1
            RETURNING {}
            "#,
            JOB_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(update.status.as_deref())
        .bind(Timestamp::now().as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("update job"))?;

        row.map(row_to_job).transpose()
    }
}

fn row_to_job(row: PgRow) -> Result<Job, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let session_id: uuid::Uuid = column(&row, "session_id")?;
    let job_type: String = column(&row, "type")?;
    let Json(media): Json<Vec<serde_json::Value>> = column(&row, "media")?;
    let status: Option<String> = column(&row, "status")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Job::reconstitute(
        JobId::from_uuid(id),
        SessionId::from_uuid(session_id),
        parse_column::<JobType>(&job_type, "type")?,
        media,
        status,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
