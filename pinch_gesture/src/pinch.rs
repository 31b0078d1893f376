//! Pinch classification.
//!
//! A hand is pinching when its thumb and index tips are close *relative to
//! the hand itself*: the tip-to-tip distance is compared against the length
//! of the thumb's last segment, measured on the same hand in the same frame.
//! Both sides scale together, so the test holds regardless of hand size or
//! distance from the camera.

use crate::landmark::{HandId, HandKeyPoints, Landmark};

/// Is this hand pinching?
///
/// `D² < L² × threshold`, where `L` is the thumb tip → thumb joint length and
/// `D` the thumb tip → index tip distance.  A collapsed thumb (`L² = 0`) never
/// counts as a pinch.
pub fn is_pinching(kp: &HandKeyPoints, threshold: f32) -> bool {
    let thumb_len_sq = kp.thumb_tip.dist_sq(kp.thumb_pip);
    // also rejects NaN
    if !(thumb_len_sq > 0.0) {
        return false;
    }
    let tip_dist_sq = kp.index_tip.dist_sq(kp.thumb_tip);
    tip_dist_sq < thumb_len_sq * threshold
}

/// The index tip of a pinching hand, `None` otherwise.
pub fn classify(kp: &HandKeyPoints, threshold: f32) -> Option<Landmark> {
    is_pinching(kp, threshold).then_some(kp.index_tip)
}

/// Classify every hand of a frame and collect the pinching ones.
pub fn detect_pinches(key_points: &[(HandId, HandKeyPoints)], threshold: f32) -> PinchState {
    key_points.iter()
        .filter_map(|(id, kp)| classify(kp, threshold).map(|tip| (*id, tip)))
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════
// PinchState
// ════════════════════════════════════════════════════════════════════════════

/// Index-tip positions of the hands pinching in one frame, keyed by
/// [`HandId`].  Iteration follows the detector's output order, which is what
/// decides the interacting pair when more than two hands pinch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PinchState {
    entries: Vec<(HandId, Landmark)>,
}

impl PinchState {
    pub fn new() -> Self {
        PinchState::default()
    }

    /// Insert or replace the position for `id`.  A new id goes to the end.
    pub fn insert(&mut self, id: HandId, pos: Landmark) {
        match self.entries.iter_mut().find(|(h, _)| *h == id) {
            Some(entry) => entry.1 = pos,
            None => self.entries.push((id, pos)),
        }
    }

    pub fn get(&self, id: HandId) -> Option<Landmark> {
        self.entries.iter().find(|(h, _)| *h == id).map(|(_, p)| *p)
    }

    pub fn contains(&self, id: HandId) -> bool {
        self.entries.iter().any(|(h, _)| *h == id)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn clear(&mut self) { self.entries.clear(); }

    pub fn iter(&self) -> impl Iterator<Item = (HandId, Landmark)> + '_ {
        self.entries.iter().copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = HandId> + '_ {
        self.entries.iter().map(|(h, _)| *h)
    }
}

impl FromIterator<(HandId, Landmark)> for PinchState {
    fn from_iter<I: IntoIterator<Item = (HandId, Landmark)>>(iter: I) -> Self {
        let mut state = PinchState::new();
        for (id, pos) in iter {
            state.insert(id, pos);
        }
        state
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
