//! Session aggregate entity.
//!
//! Sessions are the root of a recording. Sources, media segments and jobs
//! reference a session by id but are stored and managed separately.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, SessionStatus, Timestamp};

use super::{JoinCode, Layout};

/// Session aggregate - one multi-source recording.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `code` is six symbols from the join code alphabet
/// - status and layout change only through [`Session::apply`] and
///   [`Session::mark_recording`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: SessionId,
    code: JoinCode,
    status: SessionStatus,
    layout: Layout,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Partial session update.
///
/// Only `layout` and `status` are stored on the session record. Clients may
/// also send `sources`, which is a projection of the source table, and any
/// other field; all of those are dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    #[serde(default)]
    pub status: Option<SessionStatus>,
    #[serde(default)]
    pub layout: Option<Layout>,
}

impl SessionUpdate {
    pub fn status(status: SessionStatus) -> Self {
        Self {
            status: Some(status),
            layout: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.layout.is_none()
    }
}

impl Session {
    /// Create a new idle session with the default layout.
    pub fn new(id: SessionId, code: JoinCode) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            code,
            status: SessionStatus::Idle,
            layout: Layout::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        code: JoinCode,
        status: SessionStatus,
        layout: Layout,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            code,
            status,
            layout,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn code(&self) -> &JoinCode {
        &self.code
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Apply the allow-listed fields of a partial update.
    ///
    /// Returns true if anything changed.
    pub fn apply(&mut self, update: &SessionUpdate) -> bool {
        let mut changed = false;
        if let Some(status) = update.status {
            changed |= self.status != status;
            self.status = status;
        }
        if let Some(layout) = update.layout {
            changed |= self.layout != layout;
            self.layout = layout;
        }
        if changed {
            self.updated_at = Timestamp::now();
        }
        changed
    }

    /// Move the session into `Recording`.
    ///
    /// Accepted from every status, including `Recording` itself.
    pub fn mark_recording(&mut self) {
        self.apply(&SessionUpdate::status(SessionStatus::Recording));
    }
}
