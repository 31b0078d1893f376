//! How a pinching hand in this frame is matched to one in the last.
//!
//! The detector does not track hands: its output order can change when hands
//! cross, enter or leave.  [`IdentityPolicy::DetectorOrder`] accepts that and
//! uses the output position as the id, which is cheap and usually right with
//! two well-separated hands.  [`IdentityPolicy::NearestPosition`] relabels the
//! current pinches with the id of the closest tracked pinch instead.

use serde::{Deserialize, Serialize};

use crate::landmark::HandId;
use crate::pinch::PinchState;

/// Strategy for carrying hand identity from one frame to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Hand id = position in the detector's output for this frame.
    #[default]
    DetectorOrder,
    /// Closest tracked pinch wins, if it lies within `max_distance`
    /// (normalized image units).  Unmatched pinches get a fresh id.
    NearestPosition { max_distance: f32 },
}

impl IdentityPolicy {
    /// Relabel `current` against the previously tracked pinches.  The result
    /// keeps `current`'s order.
    pub fn relabel(&self, current: PinchState, tracked: &PinchState) -> PinchState {
        match *self {
            IdentityPolicy::DetectorOrder => current,
            IdentityPolicy::NearestPosition { max_distance } => {
                nearest_match(&current, tracked, max_distance)
            }
        }
    }
}

fn nearest_match(current: &PinchState, tracked: &PinchState, max_distance: f32) -> PinchState {
    let now: Vec<_> = current.iter().collect();
    let before: Vec<_> = tracked.iter().collect();

    // every admissible (current, tracked) pair, closest first
    let mut pairs: Vec<(usize, usize, f32)> = Vec::new();
    for (ci, (_, pos)) in now.iter().enumerate() {
        for (ti, (_, prev)) in before.iter().enumerate() {
            let d = pos.dist(*prev);
            if d <= max_distance {
                pairs.push((ci, ti, d));
            }
        }
    }
    pairs.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut assigned: Vec<Option<HandId>> = vec![None; now.len()];
    let mut taken = vec![false; before.len()];
    for (ci, ti, _) in pairs {
        if assigned[ci].is_none() && !taken[ti] {
            assigned[ci] = Some(before[ti].0);
            taken[ti] = true;
        }
    }

    // fresh ids must not collide with any tracked hand, matched or not
    let mut used: Vec<HandId> = before.iter().map(|(id, _)| *id).collect();
    let mut fresh = || {
        let mut id = 0;
        while used.contains(&id) {
            id += 1;
        }
        used.push(id);
        id
    };

    now.iter()
        .zip(assigned)
        .map(|((_, pos), id)| (id.unwrap_or_else(&mut fresh), *pos))
        .collect()
}
