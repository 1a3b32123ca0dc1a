//! Job queue configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Which transport carries queued job ids to the transcoding workers
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueueBackend {
    #[default]
    Memory,
    Redis,
}

/// Job queue configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QueueConfig {
    #[serde(default)]
    pub backend: QueueBackend,

    /// Name of the queue new jobs are pushed onto
    #[serde(default = "default_name")]
    pub name: String,

    /// Redis connection URL, required when `backend = "redis"`
    #[serde(default)]
    pub url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl QueueConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate queue configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyQueueName);
        }
        if self.backend == QueueBackend::Redis {
            if self.url.is_empty() {
                return Err(ValidationError::MissingRequired("QUEUE__URL"));
            }
            if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
                return Err(ValidationError::InvalidRedisUrl);
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            backend: QueueBackend::default(),
            name: default_name(),
            url: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_name() -> String {
    "transcode".to_string()
}

fn default_timeout() -> u64 {
    5
}
