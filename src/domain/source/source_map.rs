//! Per-type projection of a session's sources.

use serde::{Deserialize, Serialize};

use super::{Source, SourceType};

/// A session's sources keyed by type. Absent types are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMap {
    #[serde(rename = "Camera", default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<Source>,
    #[serde(rename = "Microphone", default, skip_serializing_if = "Option::is_none")]
    pub microphone: Option<Source>,
    #[serde(rename = "Screen", default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<Source>,
}

impl SourceMap {
    /// Builds the projection from stored sources.
    ///
    /// Sources are expected oldest first; if a lost registration race ever left
    /// two sources of one type, the earliest one wins.
    pub fn from_sources(sources: impl IntoIterator<Item = Source>) -> Self {
        let mut map = Self::default();
        for source in sources {
            let slot = map.slot_mut(source.source_type());
            if slot.is_none() {
                *slot = Some(source);
            }
        }
        map
    }

    pub fn get(&self, source_type: SourceType) -> Option<&Source> {
        match source_type {
            SourceType::Camera => self.camera.as_ref(),
            SourceType::Microphone => self.microphone.as_ref(),
            SourceType::Screen => self.screen.as_ref(),
        }
    }

    pub fn contains(&self, source_type: SourceType) -> bool {
        self.get(source_type).is_some()
    }

    pub fn len(&self) -> usize {
        SourceType::ALL.iter().filter(|t| self.contains(**t)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot_mut(&mut self, source_type: SourceType) -> &mut Option<Source> {
        match source_type {
            SourceType::Camera => &mut self.camera,
            SourceType::Microphone => &mut self.microphone,
            SourceType::Screen => &mut self.screen,
        }
    }
}
