//! An in-process stand-in for a host application's view.
//!
//! Keeps the same state a CAD viewport would (orbit angles, translation,
//! scale) and enforces the same zoom contract, so the whole pipeline can run
//! without a host attached.

use crate::{zoom_factor_accepted, SinkError, ViewSink};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedView {
    /// Rotation about the screen's vertical axis, radians.
    pub yaw:         f32,
    /// Rotation about the screen's horizontal axis, radians.
    pub pitch:       f32,
    /// Model-space translation; pans are divided by the current scale.
    pub translation: [f32; 3],
    pub scale:       f32,
    pub redraws:     u64,
}

impl Default for SimulatedView {
    fn default() -> Self {
        SimulatedView {
            yaw:         0.0,
            pitch:       0.0,
            translation: [0.0; 3],
            scale:       1.0,
            redraws:     0,
        }
    }
}

impl SimulatedView {
    pub fn new() -> Self { SimulatedView::default() }

    /// One-line summary for status bars.
    pub fn summary(&self) -> String {
        format!(
            "yaw {:.1}  pitch {:.1}  pan {:.3},{:.3}  scale {:.3}  redraws {}",
            self.yaw.to_degrees(),
            self.pitch.to_degrees(),
            self.translation[0],
            self.translation[1],
            self.scale,
            self.redraws,
        )
    }
}

impl ViewSink for SimulatedView {
    fn rotate(&mut self, x_deg: f32, y_deg: f32) -> Result<(), SinkError> {
        if !(x_deg.is_finite() && y_deg.is_finite()) {
            return Err(SinkError::NonFinite { op: "rotate" });
        }
        // x turns about the vertical axis, y about the horizontal one
        self.yaw   += x_deg.to_radians();
        self.pitch += y_deg.to_radians();
        Ok(())
    }

    fn pan(&mut self, dx: f32, dy: f32) -> Result<(), SinkError> {
        if !(dx.is_finite() && dy.is_finite()) {
            return Err(SinkError::NonFinite { op: "pan" });
        }
        self.translation[0] += dx / self.scale;
        self.translation[1] += dy / self.scale;
        Ok(())
    }

    fn zoom(&mut self, factor: f32) -> Result<(), SinkError> {
        if !zoom_factor_accepted(factor) {
            return Err(SinkError::ZoomOutOfRange { factor });
        }
        self.scale *= factor;
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), SinkError> {
        self.redraws += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch;
    use pinch_gesture::ViewCommand;

    #[test]
    fn rotate_accumulates_radians() {
        let mut v = SimulatedView::new();
        v.rotate(90.0, -45.0).unwrap();
        v.rotate(90.0, 0.0).unwrap();
        assert!((v.yaw - std::f32::consts::PI).abs() < 1e-5);
        assert!((v.pitch + std::f32::consts::FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn pan_shrinks_when_zoomed_in() {
        let mut v = SimulatedView::new();
        v.zoom(1.6).unwrap();
        v.zoom(1.25).unwrap();
        v.pan(0.5, -1.0).unwrap();
        assert!((v.scale - 2.0).abs() < 1e-6);
        assert!((v.translation[0] - 0.25).abs() < 1e-6);
        assert!((v.translation[1] + 0.5).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_zoom_leaves_scale_alone() {
        let mut v = SimulatedView::new();
        assert!(v.zoom(2.5).is_err());
        assert!(v.zoom(0.0).is_err());
        assert!(v.zoom(-1.0).is_err());
        assert_eq!(v.scale, 1.0);
    }

    #[test]
    fn nan_is_refused() {
        let mut v = SimulatedView::new();
        assert_eq!(v.rotate(f32::NAN, 0.0), Err(SinkError::NonFinite { op: "rotate" }));
        assert_eq!(v.pan(0.0, f32::INFINITY), Err(SinkError::NonFinite { op: "pan" }));
    }

    #[test]
    fn dispatch_counts_redraws() {
        let mut v = SimulatedView::new();
        dispatch(&mut v, &ViewCommand::Zoom { factor: 1.1 }).unwrap();
        dispatch(&mut v, &ViewCommand::Pan { dx: 0.1, dy: 0.1 }).unwrap();
        let _ = dispatch(&mut v, &ViewCommand::Zoom { factor: 9.0 });
        assert_eq!(v.redraws, 2);
    }
}
