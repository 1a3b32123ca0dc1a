//! PostgreSQL implementation of SessionRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, SessionId, SessionStatus, Timestamp};
use crate::domain::session::{JoinCode, Layout, Session, SessionUpdate};
use crate::ports::SessionRepository;

use super::{column, db_error, parse_column};

const SESSION_COLUMNS: &str = "id, code, status, layout, created_at, updated_at";

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, code, status, layout, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.code().as_str())
        .bind(session.status().as_str())
        .bind(Json(session.layout()))
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert session"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE id = $1",
            SESSION_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("fetch session"))?;

        row.map(row_to_session).transpose()
    }

    async fn find_by_code(&self, code: &JoinCode) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE code = $1 ORDER BY created_at ASC LIMIT 1",
            SESSION_COLUMNS
        ))
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("fetch session by code"))?;

        row.map(row_to_session).transpose()
    }

    async fn update(
        &self,
        id: &SessionId,
        update: &SessionUpdate,
    ) -> Result<Option<Session>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("begin session update"))?;

        let row = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE id = $1 FOR UPDATE",
            SESSION_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("lock session"))?;

        let Some(mut session) = row.map(row_to_session).transpose()? else {
            return Ok(None);
        };

        // updated_at only moves when a value actually changed.
        if session.apply(update) {
            sqlx::query(
                r#"
                UPDATE sessions SET status = $2, layout = $3, updated_at = $4
                WHERE id = $1
                "#,
            )
            .bind(session.id().as_uuid())
            .bind(session.status().as_str())
            .bind(Json(session.layout()))
            .bind(session.updated_at().as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(db_error("update session"))?;
        }

        tx.commit().await.map_err(db_error("commit session update"))?;
        Ok(Some(session))
    }
}

fn row_to_session(row: PgRow) -> Result<Session, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let code: String = column(&row, "code")?;
    let status: String = column(&row, "status")?;
    let Json(layout): Json<Layout> = column(&row, "layout")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Session::reconstitute(
        SessionId::from_uuid(id),
        JoinCode::from_string(code),
        parse_column::<SessionStatus>(&status, "status")?,
        layout,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
