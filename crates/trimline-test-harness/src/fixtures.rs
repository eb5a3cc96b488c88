use uuid::Uuid;

use trimline_core::media::SourceLibrary;
use trimline_core::timeline::Timeline;

use crate::builders::{ClipBuilder, SourceBuilder, TimelineBuilder};

/// A populated test scene: one track, its clips in timeline order, and the
/// library backing them.
pub struct Scene {
    pub timeline: Timeline,
    pub library: SourceLibrary,
    pub track_id: Uuid,
    pub clip_ids: Vec<Uuid>,
}

impl Scene {
    pub fn clip_id(&self, index: usize) -> Uuid {
        self.clip_ids[index]
    }
}

/// One isolated 10s video clip at t=0 backed by a 10s source. The standard
/// starting point for slip tests.
pub fn lone_media_clip() -> Scene {
    lone_media_clip_with_source(10.0, 10.0)
}

/// One isolated video clip at t=0 with explicit clip and source durations.
pub fn lone_media_clip_with_source(clip_duration: f64, source_duration: f64) -> Scene {
    let source = SourceBuilder::video("clip-a")
        .duration_secs(source_duration)
        .build();
    let clip = ClipBuilder::media(source.id)
        .at(0.0)
        .duration_secs(clip_duration)
        .build();
    let clip_id = clip.id;

    let (timeline, library) = TimelineBuilder::new()
        .with_source(source)
        .with_track("Video 1", vec![clip])
        .build();
    let track_id = timeline.tracks[0].id;

    Scene {
        timeline,
        library,
        track_id,
        clip_ids: vec![clip_id],
    }
}

/// Two back-to-back untrimmed 5s clips: [0, 5) and [5, 10). Zero slack
/// between them.
pub fn adjacent_pair() -> Scene {
    let source = SourceBuilder::video("pair").duration_secs(20.0).build();
    let a = ClipBuilder::media(source.id).at(0.0).duration_secs(5.0).build();
    let b = ClipBuilder::media(source.id).at(5.0).duration_secs(5.0).build();
    let ids = vec![a.id, b.id];

    let (timeline, library) = TimelineBuilder::new()
        .with_source(source)
        .with_track("Video 1", vec![a, b])
        .build();
    let track_id = timeline.tracks[0].id;

    Scene {
        timeline,
        library,
        track_id,
        clip_ids: ids,
    }
}

/// Three clips with the middle one trimmed on both neighbors' sides so a
/// slide has room to move: left [0, 4) with 2s of tail trim available to
/// give back, middle [4, 8), right [8, 12) with 2s of head trim.
pub fn slide_room_scene() -> Scene {
    let source = SourceBuilder::video("room").duration_secs(30.0).build();
    let left = ClipBuilder::media(source.id)
        .at(0.0)
        .duration_secs(6.0)
        .trims(0.0, 2.0)
        .build();
    let middle = ClipBuilder::media(source.id)
        .at(4.0)
        .duration_secs(4.0)
        .build();
    let right = ClipBuilder::media(source.id)
        .at(8.0)
        .duration_secs(6.0)
        .trims(2.0, 0.0)
        .build();
    let ids = vec![left.id, middle.id, right.id];

    let (timeline, library) = TimelineBuilder::new()
        .with_source(source)
        .with_track("Video 1", vec![left, middle, right])
        .build();
    let track_id = timeline.tracks[0].id;

    Scene {
        timeline,
        library,
        track_id,
        clip_ids: ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_pair_has_zero_slack() {
        let scene = adjacent_pair();
        let track = &scene.timeline.tracks[0];
        let a = track.get_clip(scene.clip_id(0)).unwrap();
        let b = track.get_clip(scene.clip_id(1)).unwrap();
        assert!((a.end_time() - b.start_time).abs() < 1e-9);
    }

    #[test]
    fn slide_room_scene_is_gap_free() {
        let scene = slide_room_scene();
        let track = &scene.timeline.tracks[0];
        let left = track.get_clip(scene.clip_id(0)).unwrap();
        let middle = track.get_clip(scene.clip_id(1)).unwrap();
        let right = track.get_clip(scene.clip_id(2)).unwrap();
        assert!((left.end_time() - middle.start_time).abs() < 1e-9);
        assert!((middle.end_time() - right.start_time).abs() < 1e-9);
    }
}
