//! Hand frame sources.
//!
//! Every source runs on its own thread and delivers [`HandFrame`]s over an
//! `mpsc` channel, which keeps them in capture order.  The run loop never
//! needs to know whether frames came from a detector process, a recording,
//! the mouse or a LeapMotion controller.  When a source stops (socket error,
//! end of recording, window closed) it drops its sender, and the run loop
//! ends on the disconnect.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use pinch_gesture::HandFrame;

use crate::config::{SourceConfig, SourceKind};
use crate::error::SourceError;

pub mod replay;
pub mod sim;
pub mod udp;
#[cfg(feature = "leap")]
pub mod leap;

pub use replay::ReplaySource;
pub use sim::{SimHandSource, SimInput};
pub use udp::UdpHandSource;

// ════════════════════════════════════════════════════════════════════════════
// HandSource trait: one interface for every input
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`HandFrame`]s over a channel.
pub trait HandSource: Send + 'static {
    /// Produce frames until the source is exhausted or `tx` hangs up.
    fn run(self: Box<Self>, tx: Sender<HandFrame>);
}

/// Spawn a hand source on its own thread and return the receiving end.
pub fn spawn_hand_source<S: HandSource>(source: S) -> Receiver<HandFrame> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

/// Open the configured source and start it.  `sim_rx` feeds the simulated
/// source and is ignored by every other kind.
pub fn open_source(
    cfg: &SourceConfig,
    sim_rx: Receiver<SimInput>,
) -> Result<Receiver<HandFrame>, SourceError> {
    let rx = match cfg.kind {
        SourceKind::Sim => spawn_hand_source(SimHandSource { rx: sim_rx }),
        SourceKind::Udp => spawn_hand_source(UdpHandSource::bind(&cfg.udp_addr())?),
        SourceKind::Replay => {
            let path = cfg.replay_path.as_deref().ok_or_else(|| SourceError::Open {
                path: String::new(),
                message: "no replay file configured".to_string(),
            })?;
            spawn_hand_source(ReplaySource::open(path, cfg.replay_fps, cfg.replay_loop)?)
        }
        SourceKind::Leap => open_leap()?,
    };
    tracing::info!(source = cfg.kind.as_str(), "hand source started");
    Ok(rx)
}

#[cfg(feature = "leap")]
fn open_leap() -> Result<Receiver<HandFrame>, SourceError> {
    Ok(spawn_hand_source(leap::LeapHandSource))
}

#[cfg(not(feature = "leap"))]
fn open_leap() -> Result<Receiver<HandFrame>, SourceError> {
    Err(SourceError::Unavailable(
        "LeapMotion support needs `--features leap`".to_string(),
    ))
}
