//! Simulated hands driven by the preview window's mouse.
//!
//! | Input | Hands |
//! |---|---|
//! | cursor over the camera panel | one open hand under the cursor |
//! | left button held | that hand pinches (orbit) |
//! | right button held | a second pinching hand, mirrored about the centre |
//! | both held, move sideways | hands spread / close (zoom) |
//! | both held, move up/down | hands move together (pan) |
//!
//! The visualizer sends one [`SimInput`] per window frame; this source turns
//! each into a [`HandFrame`] in the same 21-point layout a real detector uses.

use std::sync::mpsc::{Receiver, Sender};

use pinch_gesture::{index, DetectedHand, HandFrame, Landmark, LANDMARK_COUNT};

use super::HandSource;

/// Raw input from the preview window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimInput {
    /// Cursor position in normalized camera coordinates and button state.
    Pointer { x: f32, y: f32, primary: bool, secondary: bool },
    /// Cursor outside the camera panel: nobody in frame.
    NoHands,
}

pub struct SimHandSource {
    pub rx: Receiver<SimInput>,
}

impl HandSource for SimHandSource {
    fn run(self: Box<Self>, tx: Sender<HandFrame>) {
        for input in self.rx {
            if tx.send(synthetic_frame(input)).is_err() { return; }
        }
    }
}

/// Build the frame a detector would report for `input`.
pub fn synthetic_frame(input: SimInput) -> HandFrame {
    match input {
        SimInput::NoHands => HandFrame::empty(),
        SimInput::Pointer { x, y, primary, secondary } => {
            let mut hands = vec![synthetic_hand(x, y, primary)];
            if secondary {
                hands.push(synthetic_hand(1.0 - x, y, true));
            }
            HandFrame::new(hands)
        }
    }
}

/// A plausible upright hand with its index tip at `(x, y)`.
pub fn synthetic_hand(x: f32, y: f32, pinched: bool) -> DetectedHand {
    let mut lm = vec![Landmark::new(x, y); LANDMARK_COUNT];

    let wrist = Landmark::new(x + 0.02, y + 0.22);
    lm[index::WRIST] = wrist;

    // index finger straight up from the knuckle to the tip
    let knuckle = Landmark::new(x, y + 0.12);
    for (k, i) in [index::INDEX_FINGER_MCP, index::INDEX_FINGER_PIP, index::INDEX_FINGER_DIP]
        .into_iter()
        .enumerate()
    {
        lm[i] = Landmark::new(x, knuckle.y - k as f32 * 0.04);
    }
    lm[index::INDEX_FINGER_TIP] = Landmark::new(x, y);

    // thumb tip meets the index tip when pinched, hangs off to the side otherwise
    let thumb_tip = if pinched {
        Landmark::new(x + 0.008, y + 0.006)
    } else {
        Landmark::new(x + 0.11, y + 0.09)
    };
    lm[index::THUMB_TIP] = thumb_tip;
    lm[index::THUMB_IP]  = Landmark::new(thumb_tip.x + 0.02, thumb_tip.y + 0.035);
    lm[index::THUMB_MCP] = Landmark::new(thumb_tip.x + 0.035, thumb_tip.y + 0.075);
    lm[index::THUMB_CMC] = Landmark::new(wrist.x + 0.03, wrist.y - 0.03);

    // curled middle, ring and pinky, side by side behind the index
    let fingers = [
        [index::MIDDLE_FINGER_MCP, index::MIDDLE_FINGER_PIP, index::MIDDLE_FINGER_DIP, index::MIDDLE_FINGER_TIP],
        [index::RING_FINGER_MCP,   index::RING_FINGER_PIP,   index::RING_FINGER_DIP,   index::RING_FINGER_TIP],
        [index::PINKY_MCP,         index::PINKY_PIP,         index::PINKY_DIP,         index::PINKY_TIP],
    ];
    for (f, joints) in fingers.iter().enumerate() {
        let fx = x - 0.025 * (f as f32 + 1.0);
        for (k, &i) in joints.iter().enumerate() {
            lm[i] = Landmark::new(fx, knuckle.y - k as f32 * 0.02 + 0.01 * f as f32);
        }
    }

    DetectedHand::new(lm)
}
