//! One gesture session: the full per-frame pipeline plus the state it carries.
//!
//! ```text
//! hands ─► extract_key_points ─► detect_pinches ─► PinchTracker ─► GestureArbiter ─► Option<ViewCommand>
//! ```
//!
//! Frames must be fed strictly in capture order; movements are always
//! measured against the frame before.

use tracing::info;

use crate::arbiter::{Gesture, GestureArbiter, ViewCommand, ZoomLock};
use crate::landmark::{extract_key_points, DetectedHand, HandId, HandKeyPoints};
use crate::pinch::{detect_pinches, PinchState};
use crate::tracker::{Movement, PinchTracker};
use crate::tuning::{Tuning, TuningError};

/// Everything the pipeline worked out for one frame.  Useful for previews and
/// diagnostics; [`GestureSession::process_frame`] only returns `command`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutcome {
    pub key_points: Vec<(HandId, HandKeyPoints)>,
    pub pinches:    PinchState,
    pub movements:  Vec<Movement>,
    pub gesture:    Gesture,
    pub command:    Option<ViewCommand>,
}

#[derive(Debug, Clone)]
pub struct GestureSession {
    tuning:  Tuning,
    tracker: PinchTracker,
    arbiter: GestureArbiter,
    frames:  u64,
}

impl GestureSession {
    /// Start a session; fails if `tuning` does not validate.
    pub fn new(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(GestureSession::from_valid(tuning))
    }

    fn from_valid(tuning: Tuning) -> Self {
        GestureSession {
            tracker: PinchTracker::from_tuning(&tuning),
            arbiter: GestureArbiter::new(&tuning),
            tuning,
            frames: 0,
        }
    }

    /// Process one frame's hands and return the command to apply, if any.
    pub fn process_frame(&mut self, hands: &[DetectedHand]) -> Option<ViewCommand> {
        self.process_frame_detailed(hands).command
    }

    /// Like [`process_frame`](Self::process_frame), keeping the intermediate results.
    pub fn process_frame_detailed(&mut self, hands: &[DetectedHand]) -> FrameOutcome {
        self.frames += 1;

        let key_points = extract_key_points(hands, self.tuning.max_hands);
        let pinches    = detect_pinches(&key_points, self.tuning.pinch_threshold);
        let step       = self.tracker.update(pinches);
        let command    = self.arbiter.arbitrate(&step.movements, step.pinches.len());

        FrameOutcome {
            key_points,
            pinches:   step.pinches,
            movements: step.movements,
            gesture:   self.arbiter.gesture(),
            command,
        }
    }

    pub fn gesture(&self) -> Gesture { self.arbiter.gesture() }

    pub fn zoom_lock(&self) -> ZoomLock { self.arbiter.zoom_lock() }

    pub fn tracked(&self) -> &PinchState { self.tracker.tracked() }

    pub fn frames_processed(&self) -> u64 { self.frames }

    pub fn tuning(&self) -> &Tuning { &self.tuning }

    /// Forget all tracking and lock state.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.arbiter.reset();
        info!(frames = self.frames, "gesture session reset");
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        GestureSession::from_valid(Tuning::default())
    }
}
