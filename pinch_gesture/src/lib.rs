//! # pinch_gesture
//!
//! Turns per-frame hand landmarks from a camera hand detector into viewport
//! commands for a 3D application:
//!
//! | Gesture | Hands | Command |
//! |---|---|---|
//! | Pinch and drag | One | [`ViewCommand::Rotate`] (orbit) |
//! | Pinch both, move together | Two | [`ViewCommand::Pan`] |
//! | Pinch both, spread / squeeze | Two | [`ViewCommand::Zoom`] |
//!
//! All geometry happens in normalized 2D image coordinates.  The detector,
//! the capture loop and the host application's view API live elsewhere; see
//! the `view_sink` and `pinch_view` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use pinch_gesture::{GestureSession, Tuning, HandFrame};
//!
//! let mut session = GestureSession::new(Tuning::default()).unwrap();
//! let frame = HandFrame::empty();
//! assert_eq!(session.process_frame(&frame.hands), None);
//! ```

pub mod landmark;
pub mod pinch;
pub mod identity;
pub mod tracker;
pub mod arbiter;
pub mod session;
pub mod tuning;

pub use landmark::{
    extract_key_points, index, DetectedHand, HandFrame, HandId, HandKeyPoints, Landmark,
    LANDMARK_COUNT,
};
pub use pinch::{classify, detect_pinches, is_pinching, PinchState};
pub use identity::IdentityPolicy;
pub use tracker::{Movement, PinchTracker, TrackStep};
pub use arbiter::{Gesture, GestureArbiter, ViewCommand, ZoomLock};
pub use session::{FrameOutcome, GestureSession};
pub use tuning::{Tuning, TuningError};
