//! LeapMotion controller as a hand source (`leap` feature).
//!
//! LeapC reports joints in millimetres above the device.  Each hand is mapped
//! onto the 21-point camera layout and squashed into a normalized box, so the
//! rest of the pipeline cannot tell it from a camera detector:
//!
//! * x: −200 mm … +200 mm → 0 … 1
//! * y:   80 mm …  480 mm → 1 … 0 (up is towards the top of the image)

use std::sync::mpsc::Sender;

use pinch_gesture::{index, DetectedHand, HandFrame, Landmark, LANDMARK_COUNT};
use tracing::{error, info};

use super::HandSource;

const X_MIN_MM: f32 = -200.0;
const Y_MIN_MM: f32 = 80.0;
const SPAN_MM:  f32 = 400.0;

/// Hand source backed by a real LeapMotion controller.
///
/// Requires the LeapC shared library installed.
pub struct LeapHandSource;

impl HandSource for LeapHandSource {
    fn run(self: Box<Self>, tx: Sender<HandFrame>) {
        use leaprs::*;

        let mut connection = match Connection::create(ConnectionConfig::default()) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to create LeapC connection: {:?}", e);
                return;
            }
        };
        if let Err(e) = connection.open() {
            error!("Failed to open LeapMotion device: {:?}", e);
            return;
        }
        info!("LeapMotion connection open");

        loop {
            let msg = match connection.poll(100) {
                Ok(m)  => m,
                Err(_) => continue,
            };

            if let Event::Tracking(frame) = msg.event() {
                let hands = frame.hands().map(|h| convert_hand(&h)).collect();
                if tx.send(HandFrame::new(hands)).is_err() { return; }
            }
        }
    }
}

fn normalize(x_mm: f32, y_mm: f32, z_mm: f32) -> Landmark {
    Landmark::with_depth(
        (x_mm - X_MIN_MM) / SPAN_MM,
        1.0 - (y_mm - Y_MIN_MM) / SPAN_MM,
        z_mm / SPAN_MM,
    )
}

fn convert_hand(hand: &leaprs::Hand) -> DetectedHand {
    let palm = hand.palm().position();
    let mut landmarks = vec![normalize(palm.x, palm.y, palm.z); LANDMARK_COUNT];

    // Every digit, thumb included, contributes its proximal, intermediate and
    // distal base joints plus the tip.  LeapC models the thumb with a
    // zero-length metacarpal, so its proximal base is the CMC joint.
    for (d, digit) in hand.digits().take(5).enumerate() {
        let joints = [
            digit.proximal().prev_joint(),
            digit.intermediate().prev_joint(),
            digit.distal().prev_joint(),
            digit.distal().next_joint(),
        ];
        let base = index::THUMB_CMC + 4 * d;
        for (k, j) in joints.iter().enumerate() {
            landmarks[base + k] = normalize(j.x, j.y, j.z);
        }
    }

    let mut out = DetectedHand::new(landmarks);
    out.handedness = Some(match hand.hand_type() {
        leaprs::HandType::Left => "Left".to_string(),
        _ => "Right".to_string(),
    });
    out
}
