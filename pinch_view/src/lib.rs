//! # pinch_view
//!
//! Drive a 3D viewport with pinch gestures seen by a camera.
//!
//! Hand frames arrive from a [`source`] thread (an external detector over
//! UDP, a recording, the mouse, or a LeapMotion controller), run through a
//! [`pinch_gesture::GestureSession`], and the resulting commands are applied
//! to a host view through [`view_sink`].  An optional `minifb` window shows
//! what the pipeline sees.
//!
//! ## Preview controls (simulated hands)
//!
//! | Input | Result |
//! |---|---|
//! | Left-drag in the camera panel | Orbit |
//! | Left+right held, drag up/down | Pan |
//! | Left+right held, drag sideways | Zoom (hands spread / close) |
//! | R | Reset tracking |
//! | Q / Esc | Quit |

pub mod error;
pub mod config;
pub mod source;
pub mod recorder;
pub mod visualizer;
pub mod app;

pub use error::{PinchViewError, Result};

/// Crate version, for the startup banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
