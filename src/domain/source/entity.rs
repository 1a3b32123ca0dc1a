//! Source entity and its wire representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, SessionId, SourceId, Timestamp};

/// Kind of capture input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    Camera,
    Microphone,
    Screen,
}

impl SourceType {
    pub const ALL: [SourceType; 3] = [SourceType::Camera, SourceType::Microphone, SourceType::Screen];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Camera => "Camera",
            SourceType::Microphone => "Microphone",
            SourceType::Screen => "Screen",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Camera" => Ok(SourceType::Camera),
            "Microphone" => Ok(SourceType::Microphone),
            "Screen" => Ok(SourceType::Screen),
            other => Err(format!("unknown source type: {}", other)),
        }
    }
}

/// Source as submitted by a client; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub source_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SourceDraft {
    pub fn new(id: &str, source_type: SourceType, name: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            source_type: Some(source_type.as_str().to_string()),
            name: Some(name.to_string()),
        }
    }

    /// Validates the draft, checking `id`, `type`, then `name`.
    ///
    /// An unrecognized type counts as missing.
    pub fn validate(&self) -> Result<SourceRef, DomainError> {
        let id = self
            .id
            .as_deref()
            .and_then(SourceId::new)
            .ok_or_else(|| DomainError::missing_parameter("id"))?;
        let source_type = self
            .source_type
            .as_deref()
            .and_then(|t| t.parse::<SourceType>().ok())
            .ok_or_else(|| DomainError::missing_parameter("type"))?;
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::missing_parameter("name"))?;

        Ok(SourceRef {
            id,
            source_type,
            name: name.to_string(),
        })
    }
}

/// Session-independent description of a source.
///
/// Media segments carry this as a denormalized copy of the source that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub id: SourceId,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub name: String,
}

/// A capture source registered against a session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    id: SourceId,
    session_id: SessionId,
    #[serde(rename = "type")]
    source_type: SourceType,
    name: String,
    created_at: Timestamp,
}

impl Source {
    pub fn new(session_id: SessionId, source: SourceRef) -> Self {
        Self {
            id: source.id,
            session_id,
            source_type: source.source_type,
            name: source.name,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a source from persistence (no validation).
    pub fn reconstitute(
        id: SourceId,
        session_id: SessionId,
        source_type: SourceType,
        name: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            source_type,
            name,
            created_at,
        }
    }

    pub fn id(&self) -> &SourceId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
