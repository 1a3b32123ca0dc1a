//! PostgreSQL implementation of MediaRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, MediaId, SessionId, Timestamp};
use crate::domain::media::Media;
use crate::domain::session::RecordingMode;
use crate::domain::source::SourceRef;
use crate::ports::MediaRepository;

use super::{column, db_error, parse_column};

/// PostgreSQL implementation of MediaRepository.
#[derive(Clone)]
pub struct PostgresMediaRepository {
    pool: PgPool,
}

impl PostgresMediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaRepository for PostgresMediaRepository {
    async fn insert(&self, media: &Media) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO media (
                id, session_id, source, uploaded_url, start_time, end_time,
                duration, mode, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            "#,
        )
        .bind(media.id.as_str())
        .bind(media.session_id.as_uuid())
        .bind(media.source.as_ref().map(Json))
        .bind(&media.uploaded_url)
        .bind(media.start_time)
        .bind(media.end_time)
        .bind(media.duration)
        .bind(media.mode.as_str())
        .bind(media.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert media"))?;

        Ok(())
    }

    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Media>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, source, uploaded_url, start_time, end_time,
                   duration, mode, created_at
            FROM media
            WHERE session_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch media"))?;

        rows.into_iter().map(row_to_media).collect()
    }
}

fn row_to_media(row: PgRow) -> Result<Media, DomainError> {
    let id: String = column(&row, "id")?;
    let session_id: uuid::Uuid = column(&row, "session_id")?;
    let source: Option<Json<SourceRef>> = column(&row, "source")?;
    let mode: String = column(&row, "mode")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    Ok(Media {
        id: MediaId::new(id)
            .ok_or_else(|| DomainError::storage_failure("Stored media has an empty id"))?,
        session_id: SessionId::from_uuid(session_id),
        source: source.map(|Json(s)| s),
        uploaded_url: column(&row, "uploaded_url")?,
        start_time: column(&row, "start_time")?,
        end_time: column(&row, "end_time")?,
        duration: column(&row, "duration")?,
        mode: parse_column::<RecordingMode>(&mode, "mode")?,
        created_at: Timestamp::from_datetime(created_at),
    })
}
