use uuid::Uuid;

use trimline_core::media::{MediaSource, SourceKind, SourceLibrary};
use trimline_core::timeline::{Clip, ClipKind, Timeline, Track};

/// Builder for creating test MediaSources with sensible defaults.
pub struct SourceBuilder {
    name: String,
    kind: SourceKind,
    duration: f64,
}

impl SourceBuilder {
    pub fn video(name: &str) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::Video,
            duration: 10.0,
        }
    }

    pub fn audio(name: &str) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::Audio,
            duration: 10.0,
        }
    }

    pub fn image(name: &str) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::Image,
            duration: 0.0,
        }
    }

    pub fn duration_secs(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub fn build(self) -> MediaSource {
        MediaSource::new(self.name, self.kind, self.duration)
    }
}

/// Builder for creating test Clips with sensible defaults.
pub struct ClipBuilder {
    kind: ClipKind,
    start_time: f64,
    duration: f64,
    trim_start: f64,
    trim_end: f64,
}

impl ClipBuilder {
    pub fn media(source_id: Uuid) -> Self {
        Self {
            kind: ClipKind::Media { source_id },
            start_time: 0.0,
            duration: 5.0,
            trim_start: 0.0,
            trim_end: 0.0,
        }
    }

    pub fn text() -> Self {
        Self {
            kind: ClipKind::Text,
            start_time: 0.0,
            duration: 5.0,
            trim_start: 0.0,
            trim_end: 0.0,
        }
    }

    pub fn at(mut self, start_secs: f64) -> Self {
        self.start_time = start_secs;
        self
    }

    pub fn duration_secs(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub fn trims(mut self, trim_start: f64, trim_end: f64) -> Self {
        self.trim_start = trim_start;
        self.trim_end = trim_end;
        self
    }

    pub fn build(self) -> Clip {
        Clip {
            id: Uuid::new_v4(),
            kind: self.kind,
            start_time: self.start_time,
            duration: self.duration,
            trim_start: self.trim_start,
            trim_end: self.trim_end,
        }
    }
}

/// Build a timeline with one or more pre-populated tracks, plus the source
/// library the clips reference.
pub struct TimelineBuilder {
    tracks: Vec<Track>,
    sources: Vec<MediaSource>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: MediaSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_track(mut self, name: &str, clips: Vec<Clip>) -> Self {
        let mut track = Track::new(name);
        for clip in clips {
            track.add_clip(clip);
        }
        self.tracks.push(track);
        self
    }

    pub fn build(self) -> (Timeline, SourceLibrary) {
        let timeline = Timeline {
            tracks: self.tracks,
        };
        let mut library = SourceLibrary::new();
        for source in self.sources {
            library.import(source);
        }
        (timeline, library)
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
