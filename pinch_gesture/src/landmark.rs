//! Hand landmarks as reported by the detector, and the key-point projection.
//!
//! The detector reports every hand in the standard 21-point layout
//! (wrist = 0, thumb 1–4, index 5–8, middle 9–12, ring 13–16, pinky 17–20),
//! with `x`/`y` normalized to the image in `[0, 1]`.  Pinch detection only
//! needs three of those points, so [`extract_key_points`] projects each hand
//! down to a [`HandKeyPoints`] before anything else looks at it.

use serde::{Deserialize, Serialize};
use tracing::warn;

// ════════════════════════════════════════════════════════════════════════════
// Landmark layout
// ════════════════════════════════════════════════════════════════════════════

/// Number of landmarks in a complete hand.
pub const LANDMARK_COUNT: usize = 21;

/// Landmark indices of the 21-point hand model.
pub mod index {
    pub const WRIST:             usize = 0;
    pub const THUMB_CMC:         usize = 1;
    pub const THUMB_MCP:         usize = 2;
    /// The thumb's first joint below the tip (called `thumb_pip` in key points).
    pub const THUMB_IP:          usize = 3;
    pub const THUMB_TIP:         usize = 4;
    pub const INDEX_FINGER_MCP:  usize = 5;
    pub const INDEX_FINGER_PIP:  usize = 6;
    pub const INDEX_FINGER_DIP:  usize = 7;
    pub const INDEX_FINGER_TIP:  usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP:   usize = 13;
    pub const RING_FINGER_PIP:   usize = 14;
    pub const RING_FINGER_DIP:   usize = 15;
    pub const RING_FINGER_TIP:   usize = 16;
    pub const PINKY_MCP:         usize = 17;
    pub const PINKY_PIP:         usize = 18;
    pub const PINKY_DIP:         usize = 19;
    pub const PINKY_TIP:         usize = 20;
}

/// Position of a hand within the current frame's detector output.
///
/// This is *not* a stable identity: the detector is free to reorder hands
/// from one frame to the next.  See [`crate::IdentityPolicy`].
pub type HandId = usize;

// ════════════════════════════════════════════════════════════════════════════
// Landmark
// ════════════════════════════════════════════════════════════════════════════

/// A point in normalized image space.  `z` is the detector's relative depth
/// and is carried along but never used for gesture decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Landmark { x, y, z: 0.0 }
    }

    pub const fn with_depth(x: f32, y: f32, z: f32) -> Self {
        Landmark { x, y, z }
    }

    /// Squared 2D distance to `other`.
    pub fn dist_sq(self, other: Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// 2D distance to `other`.
    pub fn dist(self, other: Landmark) -> f32 {
        self.dist_sq(other).sqrt()
    }

    /// Uniformly scale the point about the image origin.
    pub fn scaled(self, k: f32) -> Self {
        Landmark { x: self.x * k, y: self.y * k, z: self.z * k }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Detector output
// ════════════════════════════════════════════════════════════════════════════

/// One hand as reported by the detector.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedHand {
    pub landmarks: Vec<Landmark>,
    /// "Left" / "Right" when the detector reports it.  Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handedness: Option<String>,
    /// Detection confidence when the detector reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl DetectedHand {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        DetectedHand { landmarks, handedness: None, score: None }
    }
}

/// Everything the detector saw in one camera frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    #[serde(default)]
    pub hands: Vec<DetectedHand>,
    /// Capture time in milliseconds, if the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
}

impl HandFrame {
    pub fn new(hands: Vec<DetectedHand>) -> Self {
        HandFrame { hands, timestamp_ms: None }
    }

    pub fn empty() -> Self {
        HandFrame::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HandKeyPoints
// ════════════════════════════════════════════════════════════════════════════

/// The three landmarks pinch detection needs, in fixed order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandKeyPoints {
    pub thumb_tip: Landmark,
    pub thumb_pip: Landmark,
    pub index_tip: Landmark,
}

impl HandKeyPoints {
    /// Source indices of `thumb_tip`, `thumb_pip`, `index_tip`.
    pub const INDICES: [usize; 3] = [index::THUMB_TIP, index::THUMB_IP, index::INDEX_FINGER_TIP];

    pub const fn new(thumb_tip: Landmark, thumb_pip: Landmark, index_tip: Landmark) -> Self {
        HandKeyPoints { thumb_tip, thumb_pip, index_tip }
    }

    /// Pick the key points out of a full landmark list.  `None` if the list
    /// is too short to contain all three.
    pub fn from_landmarks(landmarks: &[Landmark]) -> Option<Self> {
        let [tip, pip, index] = Self::INDICES;
        Some(HandKeyPoints {
            thumb_tip: *landmarks.get(tip)?,
            thumb_pip: *landmarks.get(pip)?,
            index_tip: *landmarks.get(index)?,
        })
    }

    pub fn scaled(&self, k: f32) -> Self {
        HandKeyPoints {
            thumb_tip: self.thumb_tip.scaled(k),
            thumb_pip: self.thumb_pip.scaled(k),
            index_tip: self.index_tip.scaled(k),
        }
    }
}

/// Project each detected hand to its key points.
///
/// Hands keep their detector position as [`HandId`].  At most `max_hands`
/// hands are considered; hands whose landmark list is too short are skipped
/// with a warning.  No hands gives an empty result.
pub fn extract_key_points(hands: &[DetectedHand], max_hands: usize) -> Vec<(HandId, HandKeyPoints)> {
    hands.iter()
        .take(max_hands)
        .enumerate()
        .filter_map(|(id, hand)| match HandKeyPoints::from_landmarks(&hand.landmarks) {
            Some(kp) => Some((id, kp)),
            None => {
                warn!(hand = id, landmarks = hand.landmarks.len(), "hand is missing key landmarks, skipped");
                None
            }
        })
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hand(offset: f32) -> DetectedHand {
        let landmarks = (0..LANDMARK_COUNT)
            .map(|i| Landmark::new(offset + i as f32 * 0.01, 0.5))
            .collect();
        DetectedHand::new(landmarks)
    }

    #[test]
    fn picks_thumb_tip_pip_and_index_tip() {
        let hand = full_hand(0.0);
        let kp = HandKeyPoints::from_landmarks(&hand.landmarks).unwrap();
        assert_eq!(kp.thumb_tip, hand.landmarks[4]);
        assert_eq!(kp.thumb_pip, hand.landmarks[3]);
        assert_eq!(kp.index_tip, hand.landmarks[8]);
    }

    #[test]
    fn no_hands_gives_empty_result() {
        assert!(extract_key_points(&[], 2).is_empty());
    }

    #[test]
    fn ids_follow_detector_order() {
        let hands = vec![full_hand(0.0), full_hand(0.3)];
        let kps = extract_key_points(&hands, 2);
        assert_eq!(kps.len(), 2);
        assert_eq!(kps[0].0, 0);
        assert_eq!(kps[1].0, 1);
        assert_eq!(kps[1].1.index_tip, hands[1].landmarks[8]);
    }

    #[test]
    fn short_hand_is_skipped_but_keeps_later_ids() {
        let short = DetectedHand::new(vec![Landmark::new(0.1, 0.1); 5]);
        let hands = vec![short, full_hand(0.2)];
        let kps = extract_key_points(&hands, 2);
        assert_eq!(kps.len(), 1);
        assert_eq!(kps[0].0, 1);
    }

    #[test]
    fn extra_hands_beyond_limit_are_ignored() {
        let hands = vec![full_hand(0.0), full_hand(0.2), full_hand(0.4)];
        assert_eq!(extract_key_points(&hands, 2).len(), 2);
    }

    #[test]
    fn frame_parses_without_optional_fields() {
        let json = r#"{"hands":[{"landmarks":[{"x":0.1,"y":0.2}]}]}"#;
        let frame: HandFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.hands.len(), 1);
        assert_eq!(frame.hands[0].landmarks[0], Landmark::new(0.1, 0.2));
        assert!(frame.timestamp_ms.is_none());
    }
}
