//! Tunable parameters of the gesture pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::IdentityPolicy;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    #[error("Invalid tuning value: {field} - {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Every knob of the pipeline.  Missing fields take the defaults below when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Degrees of orbit per unit of normalized pinch displacement.
    pub rotation_sensitivity: f32,
    /// Pan scale; negative so dragging the image moves the camera the other way.
    pub pan_sensitivity: f32,
    /// Change in two-hand distance (normalized) that switches pan to zoom.
    pub zoom_threshold: f32,
    /// Dimensionless pinch factor: tips must be closer than
    /// `thumb_segment² × pinch_threshold` (squared distances).
    pub pinch_threshold: f32,
    /// Consecutive pinch-free frames tolerated before tracking is dropped.
    pub debounce_frames: u32,
    /// Frames a detected zoom keeps being interpreted as zoom.
    pub zoom_lock_frames: u32,
    /// Hands considered per frame.
    pub max_hands: usize,
    /// Hand identity carry-over between frames.
    pub identity: IdentityPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            rotation_sensitivity: 300.0,
            pan_sensitivity:      -0.5,
            zoom_threshold:       0.025,
            pinch_threshold:      1.5,
            debounce_frames:      5,
            zoom_lock_frames:     10,
            max_hands:            2,
            identity:             IdentityPolicy::DetectorOrder,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("rotation_sensitivity", self.rotation_sensitivity),
            ("pan_sensitivity", self.pan_sensitivity),
            ("zoom_threshold", self.zoom_threshold),
            ("pinch_threshold", self.pinch_threshold),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {}", value)));
            }
        }

        if self.pinch_threshold <= 0.0 {
            return Err(invalid("pinch_threshold", "must be greater than 0".to_string()));
        }
        if self.zoom_threshold < 0.0 {
            return Err(invalid("zoom_threshold", "must not be negative".to_string()));
        }
        if self.zoom_lock_frames == 0 {
            return Err(invalid("zoom_lock_frames", "must be at least 1".to_string()));
        }
        if self.max_hands == 0 {
            return Err(invalid("max_hands", "must be at least 1".to_string()));
        }
        if let IdentityPolicy::NearestPosition { max_distance } = self.identity {
            if !(max_distance.is_finite() && max_distance > 0.0) {
                return Err(invalid(
                    "identity.max_distance",
                    format!("must be a positive distance, got {}", max_distance),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, message: String) -> TuningError {
    TuningError::InvalidValue { field, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_pinch_threshold() {
        let t = Tuning { pinch_threshold: 0.0, ..Tuning::default() };
        assert!(matches!(
            t.validate(),
            Err(TuningError::InvalidValue { field: "pinch_threshold", .. })
        ));
    }

    #[test]
    fn rejects_nan() {
        let t = Tuning { rotation_sensitivity: f32::NAN, ..Tuning::default() };
        assert!(t.validate().is_err());
    }

    #[test]
    fn rejects_zero_lock_window_and_hands() {
        assert!(Tuning { zoom_lock_frames: 0, ..Tuning::default() }.validate().is_err());
        assert!(Tuning { max_hands: 0, ..Tuning::default() }.validate().is_err());
    }

    #[test]
    fn rejects_bad_match_distance() {
        let t = Tuning {
            identity: IdentityPolicy::NearestPosition { max_distance: 0.0 },
            ..Tuning::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"pinch_threshold": 1.0}"#).unwrap();
        assert_eq!(t.pinch_threshold, 1.0);
        assert_eq!(t.debounce_frames, 5);
        assert_eq!(t.identity, IdentityPolicy::DetectorOrder);
    }

    #[test]
    fn nearest_policy_from_json() {
        let t: Tuning = serde_json::from_str(
            r#"{"identity": {"policy": "nearest_position", "max_distance": 0.2}}"#,
        ).unwrap();
        assert_eq!(t.identity, IdentityPolicy::NearestPosition { max_distance: 0.2 });
    }
}
