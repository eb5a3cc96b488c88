use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::media::SourceKind;
use crate::session::{EditKind, EditMode, EditSession, NeighborSnapshot, NeighborState};
use crate::store::{MediaResolver, TimelineStore};
use crate::timeline::{Clip, ClipKind, MIN_VISIBLE_DURATION};

/// Horizontal scale of the timeline view at zoom 1.0.
pub const PIXELS_PER_SECOND: f64 = 50.0;

/// View configuration used to translate pointer displacement into time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub pixels_per_second: f64,
    pub zoom_level: f64,
}

impl ViewConfig {
    pub fn new(zoom_level: f64) -> Self {
        Self {
            pixels_per_second: PIXELS_PER_SECOND,
            zoom_level,
        }
    }

    /// Time delta for a pointer that moved from `pointer_origin` to
    /// `pointer_now`, in seconds. Positive when dragging right.
    pub fn time_delta(&self, pointer_now: f64, pointer_origin: f64) -> f64 {
        (pointer_now - pointer_origin) / (self.pixels_per_second * self.zoom_level)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Input feed for an active session. The host forwards pointer and cancel
/// events here for exactly as long as a session is active; the editor never
/// registers listeners of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditEvent {
    /// Pointer moved to this x coordinate.
    PointerMove(f64),
    /// Pointer released; keep whatever the last step wrote.
    Release,
    /// Explicit abort; restore pre-session geometry.
    Cancel,
}

/// Whether a clip may enter slip mode.
///
/// Text clips have no source material to reveal. Media clips qualify only
/// when their source resolves to video or audio; images are static, so
/// slipping them is meaningless.
pub fn can_slip(clip: &Clip, media: &impl MediaResolver) -> bool {
    match clip.kind {
        ClipKind::Text => false,
        ClipKind::Media { source_id } => match media.resolve_source(source_id) {
            Some(source) => matches!(source.kind, SourceKind::Video | SourceKind::Audio),
            None => false,
        },
    }
}

/// The trim-constraint editor: a state machine over `Normal -> {Slip, Slide}
/// -> Normal`, driven by pointer events and writing through a
/// [`TimelineStore`].
///
/// At most one session is active at a time; `begin_*` on an active editor is
/// an error so the host can gate entry with [`TrimEditor::is_editing`].
#[derive(Debug, Clone, Default)]
pub struct TrimEditor {
    session: Option<EditSession>,
}

impl TrimEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.session.as_ref().map_or(EditMode::Normal, |s| s.mode())
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// Id of the clip under edit, if a session is active.
    pub fn editing_clip(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.clip_id)
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Start a slip session on a clip. Fails without side effect when a
    /// session is already active, the clip cannot be resolved, or the clip
    /// is ineligible (see [`can_slip`]).
    pub fn begin_slip(
        &mut self,
        store: &impl TimelineStore,
        media: &impl MediaResolver,
        track_id: Uuid,
        clip_id: Uuid,
        pointer_x: f64,
    ) -> Result<()> {
        if self.session.is_some() {
            return Err(CoreError::EditInProgress);
        }
        let track = store
            .resolve_track(track_id)
            .ok_or(CoreError::TrackNotFound(track_id))?;
        let clip = track
            .get_clip(clip_id)
            .ok_or(CoreError::ClipNotFound(clip_id))?;
        if !can_slip(clip, media) {
            return Err(CoreError::SlipIneligible(clip_id));
        }

        self.session = Some(EditSession {
            kind: EditKind::Slip,
            clip_id,
            track_id,
            pointer_origin: pointer_x,
            initial_trim_start: clip.trim_start,
            initial_trim_end: clip.trim_end,
            initial_start_time: clip.start_time,
            neighbors: NeighborSnapshot::default(),
        });
        Ok(())
    }

    /// Start a slide session on a clip. Any clip may be slid; only neighbor
    /// adjustment success is conditional later. Captures both neighbors'
    /// start time and visible duration for delta math and cancel.
    pub fn begin_slide(
        &mut self,
        store: &impl TimelineStore,
        track_id: Uuid,
        clip_id: Uuid,
        pointer_x: f64,
    ) -> Result<()> {
        if self.session.is_some() {
            return Err(CoreError::EditInProgress);
        }
        let track = store
            .resolve_track(track_id)
            .ok_or(CoreError::TrackNotFound(track_id))?;
        let clip = track
            .get_clip(clip_id)
            .ok_or(CoreError::ClipNotFound(clip_id))?;

        let snapshot = |c: &Clip| NeighborState {
            id: c.id,
            start_time: c.start_time,
            visible_duration: c.visible_duration(),
        };
        let neighbors = track
            .adjacent(clip_id)
            .map(|n| NeighborSnapshot {
                left: n.left.map(snapshot),
                right: n.right.map(snapshot),
            })
            .unwrap_or_default();

        self.session = Some(EditSession {
            kind: EditKind::Slide,
            clip_id,
            track_id,
            pointer_origin: pointer_x,
            initial_trim_start: clip.trim_start,
            initial_trim_end: clip.trim_end,
            initial_start_time: clip.start_time,
            neighbors,
        });
        Ok(())
    }

    /// Run one solver step for the current pointer position. Does nothing
    /// when no session is active or the step would produce invalid geometry;
    /// each step is computed from the session snapshot, so stale events are
    /// self-correcting.
    pub fn pointer_move(
        &self,
        store: &mut impl TimelineStore,
        media: &impl MediaResolver,
        view: &ViewConfig,
        pointer_x: f64,
    ) {
        let Some(session) = &self.session else {
            return;
        };
        let delta_time = view.time_delta(pointer_x, session.pointer_origin);
        match session.kind {
            EditKind::Slip => solve_slip(session, store, media, delta_time),
            EditKind::Slide => solve_slide(session, store, delta_time),
        }
    }

    /// Normal completion: discard the session, keeping the applied values.
    pub fn end_edit(&mut self) {
        self.session = None;
    }

    /// Abort: restore the edited clip's trim and start time from the
    /// snapshot and, for a slide, each snapshot neighbor's start time.
    /// Neighbor trims are not restored. No-op when no session is active.
    pub fn cancel_edit(&mut self, store: &mut impl TimelineStore) {
        let Some(session) = self.session.take() else {
            return;
        };

        let clip_exists = store
            .resolve_track(session.track_id)
            .and_then(|t| t.get_clip(session.clip_id))
            .is_some();
        if !clip_exists {
            return;
        }

        store.update_trim(
            session.track_id,
            session.clip_id,
            session.initial_trim_start,
            session.initial_trim_end,
        );
        store.update_start_time(session.track_id, session.clip_id, session.initial_start_time);

        if session.kind == EditKind::Slide {
            // Re-resolve: the ids come from the track as it is now, the
            // start times from the snapshot.
            let (left_id, right_id) = store
                .resolve_track(session.track_id)
                .and_then(|t| t.adjacent(session.clip_id))
                .map(|n| (n.left.map(|c| c.id), n.right.map(|c| c.id)))
                .unwrap_or((None, None));

            if let (Some(id), Some(snap)) = (left_id, session.neighbors.left) {
                store.update_start_time(session.track_id, id, snap.start_time);
            }
            if let (Some(id), Some(snap)) = (right_id, session.neighbors.right) {
                store.update_start_time(session.track_id, id, snap.start_time);
            }
        }
    }

    /// Dispatch one event from the host's input feed.
    pub fn handle_event(
        &mut self,
        store: &mut impl TimelineStore,
        media: &impl MediaResolver,
        view: &ViewConfig,
        event: EditEvent,
    ) {
        match event {
            EditEvent::PointerMove(x) => self.pointer_move(store, media, view, x),
            EditEvent::Release => self.end_edit(),
            EditEvent::Cancel => self.cancel_edit(store),
        }
    }
}

/// Recompute the edited clip's trims so the visible window shifts across the
/// source by `delta_time` while keeping its length, to first order.
fn solve_slip(
    session: &EditSession,
    store: &mut impl TimelineStore,
    media: &impl MediaResolver,
    delta_time: f64,
) {
    let Some(clip) = store
        .resolve_track(session.track_id)
        .and_then(|t| t.get_clip(session.clip_id))
    else {
        return;
    };
    let ClipKind::Media { source_id } = clip.kind else {
        return;
    };
    let duration = clip.duration;

    let Some(source) = media.resolve_source(source_id) else {
        return;
    };
    if source.duration <= 0.0 {
        return;
    }

    // Opposite signs on purpose: dragging right reveals later source content
    // at the head while retracting the tail.
    let new_trim_start = session.initial_trim_start + delta_time;
    let new_trim_end = session.initial_trim_end - delta_time;

    let max_trim = source.duration - MIN_VISIBLE_DURATION;
    let clamped_trim_start = new_trim_start.max(0.0).min(max_trim);
    let clamped_trim_end = new_trim_end.max(0.0).min(max_trim);

    let visible_duration = duration - clamped_trim_start - clamped_trim_end;
    if visible_duration < MIN_VISIBLE_DURATION {
        return;
    }
    if clamped_trim_start + clamped_trim_end >= duration - MIN_VISIBLE_DURATION {
        return;
    }

    store.update_trim(
        session.track_id,
        session.clip_id,
        clamped_trim_start,
        clamped_trim_end,
    );
}

/// Move the edited clip and pull its neighbors along so the track stays
/// gap-free. Writes are ordered edited clip -> left -> right because the
/// neighbor math reads the clip's just-computed start.
fn solve_slide(session: &EditSession, store: &mut impl TimelineStore, delta_time: f64) {
    let Some(track) = store.resolve_track(session.track_id) else {
        return;
    };
    let Some(clip) = track.get_clip(session.clip_id) else {
        return;
    };
    let visible_duration = clip.visible_duration();
    let candidate_start = (session.initial_start_time + delta_time).max(0.0);

    // Fresh resolve every step: the neighbors move while the slide runs.
    let Some(neighbors) = track.adjacent(session.clip_id) else {
        return;
    };
    let left = neighbors.left.cloned();
    let right = neighbors.right.cloned();

    let min_start = left.as_ref().map_or(0.0, |l| l.end_time());
    let max_start = right
        .as_ref()
        .map_or(f64::INFINITY, |r| r.start_time - visible_duration);
    let clamped_start = candidate_start.min(max_start).max(min_start);

    store.update_start_time(session.track_id, session.clip_id, clamped_start);

    // Left neighbor gives up or reclaims tail trim so its end meets the
    // edited clip's new start, but is left untouched rather than driven
    // below the floor or to a negative trim.
    if let (Some(left), Some(snap)) = (left, session.neighbors.left) {
        let new_left_visible = clamped_start - left.start_time;
        if new_left_visible > MIN_VISIBLE_DURATION {
            let trim_adjustment = snap.visible_duration - new_left_visible;
            let new_left_trim_end = left.trim_end + trim_adjustment;
            if new_left_trim_end >= 0.0 {
                store.update_trim(session.track_id, left.id, left.trim_start, new_left_trim_end);
            }
        }
    }

    // Right neighbor is repositioned to stay adjacent; its head trim only
    // grows when the edited clip pushed it later, and is never given back
    // when slack reopens.
    if let (Some(right), Some(snap)) = (right, session.neighbors.right) {
        let new_right_start = clamped_start + visible_duration;
        store.update_start_time(session.track_id, right.id, new_right_start);

        let time_difference = new_right_start - snap.start_time;
        if time_difference > 0.0 {
            let new_right_trim_start = right.trim_start + time_difference;
            let max_trim_start = right.duration - right.trim_end - MIN_VISIBLE_DURATION;
            if new_right_trim_start <= max_trim_start {
                store.update_trim(
                    session.track_id,
                    right.id,
                    new_right_trim_start,
                    right.trim_end,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_delta_scales_with_zoom() {
        let view = ViewConfig::new(2.0);
        // 100px at 50 px/s and zoom 2 -> 1s
        assert!((view.time_delta(300.0, 200.0) - 1.0).abs() < 1e-9);
        // Dragging left is negative.
        assert!((view.time_delta(100.0, 200.0) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn default_view_uses_base_scale() {
        let view = ViewConfig::default();
        assert!((view.time_delta(PIXELS_PER_SECOND, 0.0) - 1.0).abs() < 1e-9);
    }
}
