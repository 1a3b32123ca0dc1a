//! Job domain module.
//!
//! A job is a unit of transcoding work covering a batch of submitted media
//! segments, kept exactly as the client sent them. Workers report progress
//! through the free-form `status` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{JobId, SessionId, Timestamp};

/// Which pipeline a job runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    Mobile,
    Desktop,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Mobile => "Mobile",
            JobType::Desktop => "Desktop",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mobile" => Ok(JobType::Mobile),
            "Desktop" => Ok(JobType::Desktop),
            other => Err(format!("unknown job type: {}", other)),
        }
    }
}

/// Partial job update. Only `status` is writable; other fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobUpdate {
    #[serde(default)]
    pub status: Option<String>,
}

/// A dispatched transcoding job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    id: JobId,
    session_id: SessionId,
    #[serde(rename = "type")]
    job_type: JobType,
    media: Vec<Value>,
    status: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Job {
    /// Create a job with a fresh id and no status.
    pub fn new(session_id: SessionId, job_type: JobType, media: Vec<Value>) -> Self {
        let now = Timestamp::now();
        Self {
            id: JobId::new(),
            session_id,
            job_type,
            media,
            status: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a job from persistence (no validation).
    pub fn reconstitute(
        id: JobId,
        session_id: SessionId,
        job_type: JobType,
        media: Vec<Value>,
        status: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            job_type,
            media,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn media(&self) -> &[Value] {
        &self.media
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Apply a worker update. Returns true if the status changed.
    pub fn apply(&mut self, update: &JobUpdate) -> bool {
        match &update.status {
            Some(status) if self.status.as_deref() != Some(status.as_str()) => {
                self.status = Some(status.clone());
                self.updated_at = Timestamp::now();
                true
            }
            _ => false,
        }
    }
}
