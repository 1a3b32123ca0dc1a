//! Redis-backed job queue for transcoding workers.
//!
//! Each queue is a Redis list at `queue:<name>`; workers `BRPOP` job ids off
//! the other end. Queue names are registered in the `queues` set so that
//! `enqueue` can refuse to write to a queue nobody created.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::foundation::{DomainError, JobId};
use crate::ports::JobQueue;

const QUEUE_REGISTRY_KEY: &str = "queues";

/// Redis list queue.
#[derive(Clone)]
pub struct RedisJobQueue {
    conn: MultiplexedConnection,
}

impl RedisJobQueue {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Connect to the given Redis URL.
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        let client = redis::Client::open(url).map_err(unavailable)?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(unavailable)?;
        Ok(Self::new(conn))
    }
}

fn list_key(queue: &str) -> String {
    format!("queue:{}", queue)
}

fn unavailable(e: redis::RedisError) -> DomainError {
    DomainError::storage_failure(format!("Queue unavailable: {}", e))
}

#[async_trait]
impl JobQueue for RedisJobQueue {
    async fn ensure_exists(&self, queue: &str) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(unavailable)?;

        let added: i64 = conn.sadd(QUEUE_REGISTRY_KEY, queue).await.map_err(unavailable)?;
        if added == 1 {
            tracing::info!(queue = %queue, "Created job queue");
        }
        Ok(())
    }

    async fn enqueue(&self, queue: &str, job_id: &JobId) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();

        let exists: bool = conn
            .sismember(QUEUE_REGISTRY_KEY, queue)
            .await
            .map_err(unavailable)?;
        if !exists {
            return Err(DomainError::storage_failure(format!(
                "Queue does not exist: {}",
                queue
            )));
        }

        conn.lpush::<_, _, ()>(list_key(queue), job_id.to_string())
            .await
            .map_err(unavailable)?;
        Ok(())
    }
}
