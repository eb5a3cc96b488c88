use uuid::Uuid;

use crate::media::{MediaSource, SourceLibrary};
use crate::timeline::{Timeline, Track};

/// Read and mutation surface of the timeline store the editor drives.
///
/// Mutations are fire-and-forget: the editor assumes they are synchronous and
/// always succeed, so implementations silently ignore unknown ids rather than
/// report failure.
pub trait TimelineStore {
    fn resolve_track(&self, track_id: Uuid) -> Option<&Track>;

    fn update_trim(&mut self, track_id: Uuid, clip_id: Uuid, trim_start: f64, trim_end: f64);

    fn update_start_time(&mut self, track_id: Uuid, clip_id: Uuid, start_time: f64);

    fn update_duration(&mut self, track_id: Uuid, clip_id: Uuid, duration: f64);
}

/// Lookup of source material referenced by media clips.
pub trait MediaResolver {
    fn resolve_source(&self, source_id: Uuid) -> Option<&MediaSource>;
}

impl TimelineStore for Timeline {
    fn resolve_track(&self, track_id: Uuid) -> Option<&Track> {
        self.track(track_id)
    }

    fn update_trim(&mut self, track_id: Uuid, clip_id: Uuid, trim_start: f64, trim_end: f64) {
        if let Some(clip) = self.track_mut(track_id).and_then(|t| t.get_clip_mut(clip_id)) {
            clip.trim_start = trim_start;
            clip.trim_end = trim_end;
        }
    }

    fn update_start_time(&mut self, track_id: Uuid, clip_id: Uuid, start_time: f64) {
        if let Some(clip) = self.track_mut(track_id).and_then(|t| t.get_clip_mut(clip_id)) {
            clip.start_time = start_time;
        }
    }

    fn update_duration(&mut self, track_id: Uuid, clip_id: Uuid, duration: f64) {
        if let Some(clip) = self.track_mut(track_id).and_then(|t| t.get_clip_mut(clip_id)) {
            clip.duration = duration;
        }
    }
}

impl MediaResolver for SourceLibrary {
    fn resolve_source(&self, source_id: Uuid) -> Option<&MediaSource> {
        self.get(source_id)
    }
}
