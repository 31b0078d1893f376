//! Hand frames as JSON over UDP.
//!
//! An external detector process (camera capture + hand landmark model) sends
//! one datagram per camera frame:
//!
//! ```json
//! {"hands": [{"landmarks": [{"x": 0.41, "y": 0.62, "z": -0.01}, ...],
//!             "handedness": "Right", "score": 0.93}],
//!  "timestamp_ms": 1712345678}
//! ```
//!
//! A frame in which no hand was detected is `{"hands": []}`; it still has to
//! be sent, since empty frames drive the dropout debounce.

use std::net::UdpSocket;
use std::sync::mpsc::Sender;

use pinch_gesture::HandFrame;
use tracing::{error, warn};

use super::HandSource;
use crate::error::SourceError;

/// Largest datagram we accept.  21 landmarks × a few hands fit easily.
const MAX_PACKET: usize = 64 * 1024;

pub struct UdpHandSource {
    socket: UdpSocket,
}

impl UdpHandSource {
    /// Bind the listening socket.  Done up front so a busy port is reported
    /// before the run loop starts.
    pub fn bind(addr: &str) -> Result<Self, SourceError> {
        let socket = UdpSocket::bind(addr).map_err(|e| SourceError::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })?;
        tracing::info!("Listening for hand frames on {}", addr);
        Ok(UdpHandSource { socket })
    }

    pub fn local_addr(&self) -> Option<std::net::SocketAddr> {
        self.socket.local_addr().ok()
    }
}

/// Decode one datagram.
pub fn parse_packet(bytes: &[u8]) -> Result<HandFrame, SourceError> {
    serde_json::from_slice(bytes).map_err(|e| SourceError::Parse(e.to_string()))
}

impl HandSource for UdpHandSource {
    fn run(self: Box<Self>, tx: Sender<HandFrame>) {
        let mut buf = vec![0u8; MAX_PACKET];
        loop {
            let len = match self.socket.recv_from(&mut buf) {
                Ok((len, _peer)) => len,
                Err(e) => {
                    error!("UDP receive failed: {}", e);
                    return;
                }
            };

            match parse_packet(&buf[..len]) {
                Ok(frame) => {
                    if tx.send(frame).is_err() { return; }
                }
                Err(e) => warn!("Dropping packet: {}", e),
            }
        }
    }
}
