//! Gesture arbitration: which of orbit, pan or zoom this frame's movements mean.
//!
//! | Pinching hands with movement | Gesture |
//! |---|---|
//! | 0 | none |
//! | 1 | orbit |
//! | 2+, distance changing fast or zoom locked | zoom |
//! | 2+, otherwise | pan |
//!
//! Two-hand distance jitters, so once a zoom is recognised it is held for
//! `zoom_lock_frames` frames instead of flickering back to pan whenever the
//! per-frame distance change dips under the threshold.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tracker::Movement;
use crate::tuning::Tuning;

// ════════════════════════════════════════════════════════════════════════════
// ViewCommand
// ════════════════════════════════════════════════════════════════════════════

/// A viewport manipulation for the host application.  Applying any command
/// implies a redraw afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewCommand {
    /// Orbit about the view centre, in degrees.
    Rotate { x_deg: f32, y_deg: f32 },
    /// Translate the view (host units, scaled by `pan_sensitivity`).
    Pan { dx: f32, dy: f32 },
    /// Multiply the view scale.  Hosts accept factors in `(0, 2)` only.
    Zoom { factor: f32 },
}

impl ViewCommand {
    pub fn gesture(&self) -> Gesture {
        match self {
            ViewCommand::Rotate { .. } => Gesture::Orbit,
            ViewCommand::Pan { .. }    => Gesture::Pan,
            ViewCommand::Zoom { .. }   => Gesture::Zoom,
        }
    }
}

/// The gesture recognised in the most recent frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Orbit,
    Pan,
    Zoom,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Idle  => "idle",
            Gesture::Orbit => "orbit",
            Gesture::Pan   => "pan",
            Gesture::Zoom  => "zoom",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ZoomLock
// ════════════════════════════════════════════════════════════════════════════

/// Hysteresis that keeps a recognised zoom alive for a few frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoomLock {
    active: bool,
    frames: u32,
}

impl ZoomLock {
    pub fn is_active(&self) -> bool { self.active }

    /// Frames zoomed under the current lock.
    pub fn frames(&self) -> u32 { self.frames }

    fn engage(&mut self) {
        self.active = true;
        self.frames = 0;
    }

    fn release(&mut self) {
        self.active = false;
        self.frames = 0;
    }

    /// Count one locked frame; returns true when this frame used up the window.
    fn tick(&mut self, window: u32) -> bool {
        self.frames += 1;
        if self.frames >= window {
            self.active = false;
            true
        } else {
            false
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GestureArbiter
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct GestureArbiter {
    rotation_sensitivity: f32,
    pan_sensitivity:      f32,
    zoom_threshold:       f32,
    zoom_lock_frames:     u32,
    lock:                 ZoomLock,
    gesture:              Gesture,
}

impl GestureArbiter {
    pub fn new(tuning: &Tuning) -> Self {
        GestureArbiter {
            rotation_sensitivity: tuning.rotation_sensitivity,
            pan_sensitivity:      tuning.pan_sensitivity,
            zoom_threshold:       tuning.zoom_threshold,
            zoom_lock_frames:     tuning.zoom_lock_frames,
            lock:                 ZoomLock::default(),
            gesture:              Gesture::Idle,
        }
    }

    /// Decide this frame's command.
    ///
    /// `movements` must be in detector order; the first two form the pair for
    /// two-hand gestures.  `pinching` is the number of hands pinching this
    /// frame, with or without a movement.
    pub fn arbitrate(&mut self, movements: &[Movement], pinching: usize) -> Option<ViewCommand> {
        let command = match movements {
            [] => {
                self.gesture = Gesture::Idle;
                None
            }
            [only] => {
                self.gesture = Gesture::Orbit;
                Some(self.orbit(only))
            }
            [first, second, ..] => self.pan_or_zoom(first, second),
        };

        if pinching < 2 && self.lock.is_active() {
            self.lock.release();
            debug!("zoom lock released: fewer than two hands pinching");
        }

        if let Some(cmd) = &command {
            debug!(?cmd, "gesture command");
        }
        command
    }

    fn orbit(&self, m: &Movement) -> ViewCommand {
        let (dx, dy) = m.delta();
        ViewCommand::Rotate {
            x_deg: -dx * self.rotation_sensitivity,
            y_deg:  dy * self.rotation_sensitivity,
        }
    }

    fn pan_or_zoom(&mut self, a: &Movement, b: &Movement) -> Option<ViewCommand> {
        let curr_dist = a.to.dist(b.to);
        let last_dist = a.from.dist(b.from);
        let delta     = (curr_dist - last_dist).abs();

        if self.lock.is_active() {
            self.gesture = Gesture::Zoom;
            if self.lock.tick(self.zoom_lock_frames) {
                debug!(frames = self.zoom_lock_frames, "zoom lock expired");
            }
            return zoom(curr_dist, last_dist);
        }

        if delta > self.zoom_threshold {
            self.lock.engage();
            self.gesture = Gesture::Zoom;
            debug!(delta, "zoom lock engaged");
            return zoom(curr_dist, last_dist);
        }

        self.gesture = Gesture::Pan;
        let dx = (a.dx() + b.dx()) / 2.0;
        let dy = (a.dy() + b.dy()) / 2.0;
        Some(ViewCommand::Pan {
            dx: dx * self.pan_sensitivity,
            dy: dy * self.pan_sensitivity,
        })
    }

    pub fn gesture(&self) -> Gesture { self.gesture }

    pub fn zoom_lock(&self) -> ZoomLock { self.lock }

    pub fn reset(&mut self) {
        self.lock.release();
        self.gesture = Gesture::Idle;
    }
}

/// Zoom by the ratio of hand distances; nothing when the previous distance is
/// zero and the ratio is undefined.
fn zoom(curr_dist: f32, last_dist: f32) -> Option<ViewCommand> {
    if !(last_dist > 0.0) {
        debug!("zoom skipped: previous hand distance is zero");
        return None;
    }
    let factor = curr_dist / last_dist;
    factor.is_finite().then_some(ViewCommand::Zoom { factor })
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Landmark;

    fn mv(hand: usize, from: (f32, f32), to: (f32, f32)) -> Movement {
        Movement { hand, from: Landmark::new(from.0, from.1), to: Landmark::new(to.0, to.1) }
    }

    fn arbiter() -> GestureArbiter {
        GestureArbiter::new(&Tuning::default())
    }

    /// Two hands on a horizontal line `last` apart, then `curr` apart.
    fn spread(last: f32, curr: f32) -> [Movement; 2] {
        [
            mv(0, (0.5 - last / 2.0, 0.5), (0.5 - curr / 2.0, 0.5)),
            mv(1, (0.5 + last / 2.0, 0.5), (0.5 + curr / 2.0, 0.5)),
        ]
    }

    #[test]
    fn no_movement_no_command() {
        let mut a = arbiter();
        assert_eq!(a.arbitrate(&[], 0), None);
        assert_eq!(a.gesture(), Gesture::Idle);
    }

    #[test]
    fn single_hand_orbits_with_inverted_x() {
        let mut a = arbiter();
        let cmd = a.arbitrate(&[mv(0, (0.5, 0.5), (0.52, 0.48))], 1);
        match cmd {
            Some(ViewCommand::Rotate { x_deg, y_deg }) => {
                assert!((x_deg + 6.0).abs() < 1e-3);
                assert!((y_deg + 6.0).abs() < 1e-3);
            }
            other => panic!("expected rotate, got {:?}", other),
        }
        assert_eq!(a.gesture(), Gesture::Orbit);
    }

    #[test]
    fn steady_distance_pans_with_average() {
        let mut a = arbiter();
        let moves = [mv(0, (0.3, 0.5), (0.32, 0.52)), mv(1, (0.7, 0.5), (0.72, 0.54))];
        match a.arbitrate(&moves, 2) {
            Some(ViewCommand::Pan { dx, dy }) => {
                assert!((dx + 0.01).abs() < 1e-5);
                assert!((dy + 0.015).abs() < 1e-5);
            }
            other => panic!("expected pan, got {:?}", other),
        }
        assert!(!a.zoom_lock().is_active());
    }

    #[test]
    fn fast_spread_zooms_and_locks() {
        let mut a = arbiter();
        match a.arbitrate(&spread(0.30, 0.35), 2) {
            Some(ViewCommand::Zoom { factor }) => assert!((factor - 0.35 / 0.30).abs() < 1e-4),
            other => panic!("expected zoom, got {:?}", other),
        }
        assert!(a.zoom_lock().is_active());
        assert_eq!(a.zoom_lock().frames(), 0);
    }

    #[test]
    fn lock_holds_for_window_then_releases() {
        let mut a = arbiter();
        a.arbitrate(&spread(0.30, 0.35), 2);
        for i in 1..=10 {
            let cmd = a.arbitrate(&spread(0.35, 0.351), 2);
            assert!(matches!(cmd, Some(ViewCommand::Zoom { .. })), "frame {} should zoom", i);
        }
        assert!(!a.zoom_lock().is_active());
        assert!(matches!(a.arbitrate(&spread(0.35, 0.351), 2), Some(ViewCommand::Pan { .. })));
    }

    #[test]
    fn losing_a_hand_releases_lock() {
        let mut a = arbiter();
        a.arbitrate(&spread(0.30, 0.35), 2);
        a.arbitrate(&[mv(0, (0.3, 0.5), (0.31, 0.5))], 1);
        assert!(!a.zoom_lock().is_active());
        assert!(matches!(a.arbitrate(&spread(0.35, 0.351), 2), Some(ViewCommand::Pan { .. })));
    }

    #[test]
    fn zero_previous_distance_skips_zoom() {
        let mut a = arbiter();
        let moves = [mv(0, (0.5, 0.5), (0.45, 0.5)), mv(1, (0.5, 0.5), (0.55, 0.5))];
        assert_eq!(a.arbitrate(&moves, 2), None);
        assert_eq!(a.gesture(), Gesture::Zoom);
        assert!(a.zoom_lock().is_active());
    }

    #[test]
    fn extra_hands_beyond_pair_are_ignored() {
        let mut a = arbiter();
        let [m0, m1] = spread(0.30, 0.30);
        let wild = mv(2, (0.1, 0.1), (0.9, 0.9));
        assert!(matches!(a.arbitrate(&[m0, m1, wild], 3), Some(ViewCommand::Pan { .. })));
    }

    #[test]
    fn command_serializes_with_kind_tag() {
        let json = serde_json::to_string(&ViewCommand::Zoom { factor: 1.5 }).unwrap();
        assert_eq!(json, r#"{"kind":"zoom","factor":1.5}"#);
    }
}
