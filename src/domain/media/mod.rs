//! Media domain module.
//!
//! A media segment is one finished recording chunk uploaded by a capturing
//! client. Segments are validated field by field; a batch of them is handed to
//! a transcoding job as submitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{DomainError, MediaId, SessionId, Timestamp};
use crate::domain::session::RecordingMode;
use crate::domain::source::{SourceDraft, SourceRef};

/// Media segment as submitted by a client; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSegment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uploaded_url: Option<String>,
    #[serde(default)]
    pub source: Option<SourceDraft>,
    #[serde(default)]
    pub start_time: Option<i64>,
    #[serde(default)]
    pub end_time: Option<i64>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub mode: Option<String>,
}

impl MediaSegment {
    /// Reads a segment from one element of an uploaded batch.
    ///
    /// Each field is read on its own; a field of the wrong JSON type is
    /// treated as absent, so `validate` reports it like a missing one. A
    /// non-object element reads as an empty segment.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        let integer = |key: &str| value.get(key).and_then(Value::as_i64);

        Self {
            id: text("id"),
            uploaded_url: text("uploadedUrl"),
            source: value
                .get("source")
                .and_then(|s| serde_json::from_value(s.clone()).ok()),
            start_time: integer("startTime"),
            end_time: integer("endTime"),
            duration: integer("duration"),
            mode: text("mode"),
        }
    }

    /// Validates the segment, checking fields in submission order:
    /// `id`, `uploadedUrl`, `startTime`, `endTime`, `duration`, `mode`.
    ///
    /// Zero and negative times are treated like absent ones. An unknown mode
    /// counts as missing. A malformed `source` is dropped, not rejected.
    pub fn validate(&self, session_id: SessionId) -> Result<Media, DomainError> {
        let id = self
            .id
            .as_deref()
            .and_then(MediaId::new)
            .ok_or_else(|| DomainError::missing_parameter("id"))?;
        let uploaded_url = self
            .uploaded_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DomainError::missing_parameter("uploadedUrl"))?;
        let start_time = positive(self.start_time, "startTime")?;
        let end_time = positive(self.end_time, "endTime")?;
        let duration = positive(self.duration, "duration")?;
        let mode = self
            .mode
            .as_deref()
            .and_then(|m| m.parse::<RecordingMode>().ok())
            .ok_or_else(|| DomainError::missing_parameter("mode"))?;

        Ok(Media {
            id,
            session_id,
            source: self.source.as_ref().and_then(|s| s.validate().ok()),
            uploaded_url: uploaded_url.to_string(),
            start_time,
            end_time,
            duration,
            mode,
            created_at: Timestamp::now(),
        })
    }
}

fn positive(value: Option<i64>, field: &str) -> Result<i64, DomainError> {
    value
        .filter(|v| *v > 0)
        .ok_or_else(|| DomainError::missing_parameter(field))
}

/// A persisted media segment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: MediaId,
    pub session_id: SessionId,
    pub source: Option<SourceRef>,
    pub uploaded_url: String,
    pub start_time: i64,
    pub end_time: i64,
    pub duration: i64,
    pub mode: RecordingMode,
    pub created_at: Timestamp,
}
