use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of material behind a media clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Video,
    Audio,
    /// Static; has no timeline content to reveal or hide.
    Image,
}

/// An imported piece of source material that media clips reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSource {
    pub id: Uuid,
    pub name: String,
    pub kind: SourceKind,
    /// Total length of the source material in seconds.
    pub duration: f64,
}

impl MediaSource {
    pub fn new(name: impl Into<String>, kind: SourceKind, duration: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            duration,
        }
    }
}

/// Flat library of imported sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceLibrary {
    sources: Vec<MediaSource>,
}

impl SourceLibrary {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn import(&mut self, source: MediaSource) {
        self.sources.push(source);
    }

    pub fn remove(&mut self, id: Uuid) -> Option<MediaSource> {
        let idx = self.sources.iter().position(|s| s.id == id)?;
        Some(self.sources.remove(idx))
    }

    pub fn get(&self, id: Uuid) -> Option<&MediaSource> {
        self.sources.iter().find(|s| s.id == id)
    }

    pub fn sources(&self) -> &[MediaSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
