use uuid::Uuid;

use trimline_core::timeline::{MIN_VISIBLE_DURATION, Track};

/// Assert that no two clips' visible ranges overlap on a track.
pub fn assert_no_overlaps(track: &Track) {
    for (i, a) in track.clips.iter().enumerate() {
        for b in track.clips.iter().skip(i + 1) {
            let overlap = a.start_time < b.end_time() && b.start_time < a.end_time();
            assert!(
                !overlap,
                "clips {:?} [{:.3}, {:.3}) and {:?} [{:.3}, {:.3}) overlap on track {}",
                a.id,
                a.start_time,
                a.end_time(),
                b.id,
                b.start_time,
                b.end_time(),
                track.name
            );
        }
    }
}

/// Assert that every clip on a track keeps at least the minimum visible
/// duration.
pub fn assert_visible_floor(track: &Track) {
    for clip in &track.clips {
        assert!(
            clip.visible_duration() >= MIN_VISIBLE_DURATION - 1e-9,
            "clip {:?} visible duration {:.4} is below the {:.1}s floor",
            clip.id,
            clip.visible_duration(),
            MIN_VISIBLE_DURATION
        );
    }
}

/// Assert a clip's full geometry (start, trim_start, trim_end) within a
/// small tolerance.
pub fn assert_clip_geometry(
    track: &Track,
    clip_id: Uuid,
    start_time: f64,
    trim_start: f64,
    trim_end: f64,
) {
    let clip = track
        .get_clip(clip_id)
        .unwrap_or_else(|| panic!("clip {clip_id:?} not found on track {}", track.name));
    assert!(
        (clip.start_time - start_time).abs() < 1e-9,
        "clip {:?} start {:.4} != expected {:.4}",
        clip_id,
        clip.start_time,
        start_time
    );
    assert!(
        (clip.trim_start - trim_start).abs() < 1e-9,
        "clip {:?} trim_start {:.4} != expected {:.4}",
        clip_id,
        clip.trim_start,
        trim_start
    );
    assert!(
        (clip.trim_end - trim_end).abs() < 1e-9,
        "clip {:?} trim_end {:.4} != expected {:.4}",
        clip_id,
        clip.trim_end,
        trim_end
    );
}
