//! # view_sink
//!
//! The boundary between gesture interpretation and the host application's
//! view.  A host exposes three primitives plus a redraw:
//!
//! | Call | Meaning |
//! |---|---|
//! | `rotate(x_deg, y_deg)` | orbit about the view centre |
//! | `pan(dx, dy)` | translate the view |
//! | `zoom(factor)` | scale the view; only `0 < factor < 2` is accepted |
//! | `redraw()` | repaint after a change |
//!
//! [`dispatch`] applies one [`ViewCommand`] and then redraws.  Hosts may refuse
//! a command; callers in a frame loop use [`apply_or_log`], which logs the
//! refusal and carries on.

use pinch_gesture::ViewCommand;
use tracing::warn;

mod connect;
mod logging;
mod simulated;

pub use connect::{connect_with_retry, RetryPolicy};
pub use logging::LoggingSink;
pub use simulated::SimulatedView;

use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinkError {
    #[error("Zoom factor {factor} outside the accepted range (0, 2)")]
    ZoomOutOfRange { factor: f32 },

    #[error("Non-finite argument to {op}")]
    NonFinite { op: &'static str },

    #[error("Host view unavailable: {0}")]
    Unavailable(String),

    #[error("Host rejected {op}: {message}")]
    Rejected { op: &'static str, message: String },
}

/// Lower (exclusive) bound of an acceptable zoom factor.
pub const ZOOM_MIN: f32 = 0.0;
/// Upper (exclusive) bound of an acceptable zoom factor.
pub const ZOOM_MAX: f32 = 2.0;

/// `0 < factor < 2`.
pub fn zoom_factor_accepted(factor: f32) -> bool {
    factor > ZOOM_MIN && factor < ZOOM_MAX
}

// ════════════════════════════════════════════════════════════════════════════
// ViewSink
// ════════════════════════════════════════════════════════════════════════════

/// A host view that can be orbited, panned and zoomed.
pub trait ViewSink {
    fn rotate(&mut self, x_deg: f32, y_deg: f32) -> Result<(), SinkError>;
    fn pan(&mut self, dx: f32, dy: f32) -> Result<(), SinkError>;
    fn zoom(&mut self, factor: f32) -> Result<(), SinkError>;
    fn redraw(&mut self) -> Result<(), SinkError>;
}

impl<S: ViewSink + ?Sized> ViewSink for Box<S> {
    fn rotate(&mut self, x_deg: f32, y_deg: f32) -> Result<(), SinkError> { (**self).rotate(x_deg, y_deg) }
    fn pan(&mut self, dx: f32, dy: f32) -> Result<(), SinkError>           { (**self).pan(dx, dy) }
    fn zoom(&mut self, factor: f32) -> Result<(), SinkError>               { (**self).zoom(factor) }
    fn redraw(&mut self) -> Result<(), SinkError>                          { (**self).redraw() }
}

/// Apply `cmd`, then redraw.  A refused command is not redrawn.
pub fn dispatch<S: ViewSink + ?Sized>(sink: &mut S, cmd: &ViewCommand) -> Result<(), SinkError> {
    match *cmd {
        ViewCommand::Rotate { x_deg, y_deg } => sink.rotate(x_deg, y_deg)?,
        ViewCommand::Pan { dx, dy }          => sink.pan(dx, dy)?,
        ViewCommand::Zoom { factor }         => sink.zoom(factor)?,
    }
    sink.redraw()
}

/// [`dispatch`], logging any failure instead of returning it.  Returns
/// whether the command was applied.
pub fn apply_or_log<S: ViewSink + ?Sized>(sink: &mut S, cmd: &ViewCommand) -> bool {
    match dispatch(sink, cmd) {
        Ok(()) => true,
        Err(e) => {
            warn!(?cmd, error = %e, "view command not applied");
            false
        }
    }
}
