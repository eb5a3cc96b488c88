use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum permitted visible duration of any clip, in seconds. Trim and
/// position edits that would shrink a clip below this floor are rejected.
pub const MIN_VISIBLE_DURATION: f64 = 0.1;

/// What a clip holds. Only media clips reference source material, so only
/// they can be slipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClipKind {
    /// References an item in the source library.
    Media { source_id: Uuid },
    /// Rendered text, no underlying source material.
    Text,
}

/// A clip placed on a track.
///
/// `duration` is the clip's full source-relative span; `trim_start` and
/// `trim_end` carve the visible window out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: Uuid,
    pub kind: ClipKind,
    /// Position on the timeline, seconds from the start.
    pub start_time: f64,
    /// Full span before trims are applied.
    pub duration: f64,
    /// Seconds hidden at the head of the clip.
    pub trim_start: f64,
    /// Seconds hidden at the tail of the clip.
    pub trim_end: f64,
}

impl Clip {
    pub fn media(source_id: Uuid, start_time: f64, duration: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ClipKind::Media { source_id },
            start_time,
            duration,
            trim_start: 0.0,
            trim_end: 0.0,
        }
    }

    pub fn text(start_time: f64, duration: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ClipKind::Text,
            start_time,
            duration,
            trim_start: 0.0,
            trim_end: 0.0,
        }
    }

    /// On-timeline length: `duration - trim_start - trim_end`.
    pub fn visible_duration(&self) -> f64 {
        self.duration - self.trim_start - self.trim_end
    }

    /// Timeline position where the visible portion ends.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.visible_duration()
    }
}

/// The clips immediately before and after a clip in start-time order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neighbors<'a> {
    pub left: Option<&'a Clip>,
    pub right: Option<&'a Clip>,
}

/// A track holding an unordered set of clips. Ordering is established by
/// start time whenever geometry is resolved, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: Uuid,
    pub name: String,
    pub clips: Vec<Clip>,
}

impl Track {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            clips: Vec::new(),
        }
    }

    pub fn add_clip(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    pub fn remove_clip(&mut self, clip_id: Uuid) -> Option<Clip> {
        let idx = self.clips.iter().position(|c| c.id == clip_id)?;
        Some(self.clips.remove(idx))
    }

    pub fn get_clip(&self, clip_id: Uuid) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == clip_id)
    }

    pub fn get_clip_mut(&mut self, clip_id: Uuid) -> Option<&mut Clip> {
        self.clips.iter_mut().find(|c| c.id == clip_id)
    }

    /// Resolve the clips adjacent to `clip_id` in start-time order.
    ///
    /// Sorts a fresh view of the track on every call: neighbors shift while a
    /// slide is in progress, so stale ordering must never be reused. Returns
    /// `None` when the clip is not on this track.
    pub fn adjacent(&self, clip_id: Uuid) -> Option<Neighbors<'_>> {
        let mut sorted: Vec<&Clip> = self.clips.iter().collect();
        sorted.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        let idx = sorted.iter().position(|c| c.id == clip_id)?;
        Some(Neighbors {
            left: if idx > 0 { Some(sorted[idx - 1]) } else { None },
            right: sorted.get(idx + 1).copied(),
        })
    }
}

/// All tracks of the project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub tracks: Vec<Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Add an empty track and return its id.
    pub fn add_track(&mut self, name: impl Into<String>) -> Uuid {
        let track = Track::new(name);
        let id = track.id;
        self.tracks.push(track);
        id
    }

    pub fn track(&self, track_id: Uuid) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    pub fn track_mut(&mut self, track_id: Uuid) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == track_id)
    }

    pub fn clip(&self, track_id: Uuid, clip_id: Uuid) -> Option<&Clip> {
        self.track(track_id)?.get_clip(clip_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_duration_subtracts_both_trims() {
        let mut clip = Clip::media(Uuid::new_v4(), 0.0, 10.0);
        clip.trim_start = 1.5;
        clip.trim_end = 2.0;
        assert!((clip.visible_duration() - 6.5).abs() < 1e-9);
        assert!((clip.end_time() - 6.5).abs() < 1e-9);
    }

    #[test]
    fn adjacent_uses_start_time_order_not_insertion_order() {
        let mut track = Track::new("Video 1");
        let source = Uuid::new_v4();
        let late = Clip::media(source, 10.0, 5.0);
        let early = Clip::media(source, 0.0, 5.0);
        let middle = Clip::media(source, 5.0, 5.0);
        let (early_id, middle_id, late_id) = (early.id, middle.id, late.id);

        // Deliberately inserted out of order.
        track.add_clip(late);
        track.add_clip(early);
        track.add_clip(middle);

        let n = track.adjacent(middle_id).unwrap();
        assert_eq!(n.left.unwrap().id, early_id);
        assert_eq!(n.right.unwrap().id, late_id);

        let n = track.adjacent(early_id).unwrap();
        assert!(n.left.is_none());
        assert_eq!(n.right.unwrap().id, middle_id);

        let n = track.adjacent(late_id).unwrap();
        assert_eq!(n.left.unwrap().id, middle_id);
        assert!(n.right.is_none());
    }

    #[test]
    fn adjacent_unknown_clip_is_none() {
        let track = Track::new("Video 1");
        assert!(track.adjacent(Uuid::new_v4()).is_none());
    }
}
