//! In-memory job queue.
//!
//! Records enqueued job ids per queue name. A failure switch lets tests
//! exercise the enqueue-after-persist failure path.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, JobId};
use crate::ports::JobQueue;

/// Process-local stand-in for the transcoding queue.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobQueue {
    queues: Arc<RwLock<HashMap<String, Vec<JobId>>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Job ids enqueued on the named queue, oldest first.
    pub async fn messages(&self, queue: &str) -> Vec<JobId> {
        self.queues
            .read()
            .await
            .get(queue)
            .cloned()
            .unwrap_or_default()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::storage_failure("Queue unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn ensure_exists(&self, queue: &str) -> Result<(), DomainError> {
        self.check_available()?;
        self.queues
            .write()
            .await
            .entry(queue.to_string())
            .or_default();
        Ok(())
    }

    async fn enqueue(&self, queue: &str, job_id: &JobId) -> Result<(), DomainError> {
        self.check_available()?;
        let mut queues = self.queues.write().await;
        let messages = queues
            .get_mut(queue)
            .ok_or_else(|| DomainError::storage_failure(format!("Queue does not exist: {}", queue)))?;
        messages.push(*job_id);
        Ok(())
    }
}
