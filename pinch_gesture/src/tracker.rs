//! Cross-frame pinch tracking.
//!
//! The tracker remembers the last non-empty [`PinchState`] and turns each new
//! one into per-hand [`Movement`]s.  Detection drops out for a frame or two
//! all the time, so an empty frame does not forget anything by itself: the
//! tracked pinches are only cleared once more than `debounce_frames`
//! consecutive frames have had no pinch at all.

use tracing::debug;

use crate::identity::IdentityPolicy;
use crate::landmark::{HandId, Landmark};
use crate::pinch::PinchState;
use crate::tuning::Tuning;

// ════════════════════════════════════════════════════════════════════════════
// Movement
// ════════════════════════════════════════════════════════════════════════════

/// Frame-to-frame displacement of one pinching hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Movement {
    pub hand: HandId,
    /// Tracked (previous) pinch position.
    pub from: Landmark,
    /// Current pinch position.
    pub to:   Landmark,
}

impl Movement {
    pub fn dx(&self) -> f32 { self.to.x - self.from.x }
    pub fn dy(&self) -> f32 { self.to.y - self.from.y }

    pub fn delta(&self) -> (f32, f32) { (self.dx(), self.dy()) }
}

// ════════════════════════════════════════════════════════════════════════════
// PinchTracker
// ════════════════════════════════════════════════════════════════════════════

/// Result of feeding one frame to the tracker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackStep {
    /// This frame's pinches, after identity relabelling.
    pub pinches:   PinchState,
    /// One entry per hand pinching both now and in the tracked state,
    /// in current detector order.
    pub movements: Vec<Movement>,
}

#[derive(Debug, Clone)]
pub struct PinchTracker {
    tracked:         PinchState,
    empty_frames:    u32,
    debounce_frames: u32,
    identity:        IdentityPolicy,
}

impl PinchTracker {
    pub fn new(debounce_frames: u32, identity: IdentityPolicy) -> Self {
        PinchTracker {
            tracked: PinchState::new(),
            empty_frames: 0,
            debounce_frames,
            identity,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        PinchTracker::new(tuning.debounce_frames, tuning.identity)
    }

    /// Advance by one frame.
    pub fn update(&mut self, pinches: PinchState) -> TrackStep {
        let pinches = self.identity.relabel(pinches, &self.tracked);

        let movements = pinches.iter()
            .filter_map(|(hand, to)| {
                self.tracked.get(hand).map(|from| Movement { hand, from, to })
            })
            .collect();

        if pinches.is_empty() {
            self.empty_frames += 1;
            if self.empty_frames > self.debounce_frames {
                if !self.tracked.is_empty() {
                    debug!(empty_frames = self.empty_frames, "tracked pinches cleared");
                }
                self.tracked.clear();
                self.empty_frames = 0;
            }
        } else {
            self.tracked = pinches.clone();
            self.empty_frames = 0;
        }

        TrackStep { pinches, movements }
    }

    /// Pinches remembered from the most recent non-empty frame.
    pub fn tracked(&self) -> &PinchState { &self.tracked }

    /// Consecutive pinch-free frames seen since the last pinch or clear.
    pub fn empty_frames(&self) -> u32 { self.empty_frames }

    pub fn reset(&mut self) {
        self.tracked.clear();
        self.empty_frames = 0;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
