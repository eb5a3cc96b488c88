use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The editing mode the editor reports to its host. `Normal` means no
/// session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    Normal,
    Slip,
    Slide,
}

/// Geometry of a neighbor captured when a slide session starts. Used both
/// for incremental trim math and for restoring start times on cancel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborState {
    pub id: Uuid,
    pub start_time: f64,
    /// Visible duration at capture time, trims already subtracted.
    pub visible_duration: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborSnapshot {
    pub left: Option<NeighborState>,
    pub right: Option<NeighborState>,
}

/// Which solver an active session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    Slip,
    Slide,
}

/// Snapshot of pre-edit geometry, created when a slip or slide begins and
/// destroyed on release or cancel.
///
/// Every pointer-move step computes from these `initial_*` values, never from
/// the previous step's output, so a stale or repeated move event resolves to
/// the same writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditSession {
    pub kind: EditKind,
    pub clip_id: Uuid,
    pub track_id: Uuid,
    /// Pointer x coordinate when the session started.
    pub pointer_origin: f64,
    pub initial_trim_start: f64,
    pub initial_trim_end: f64,
    pub initial_start_time: f64,
    /// Populated for slide sessions only.
    pub neighbors: NeighborSnapshot,
}

impl EditSession {
    pub fn mode(&self) -> EditMode {
        match self.kind {
            EditKind::Slip => EditMode::Slip,
            EditKind::Slide => EditMode::Slide,
        }
    }
}
