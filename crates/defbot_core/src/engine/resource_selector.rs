//! Boost pad selection
//!
//! 패드 점수 = dir(agent→pad) · dir(pad→own_goal)
//! "집에 가는 길에 있는" 패드일수록 1.0에 가깝다.
//!
//! Replacement gate (both checks evaluated together):
//! - pad is large, OR its score beats the current best by more than `alignment_margin`
//! - AND its score is strictly higher than the current best
//!
//! Large pads skip the margin but never the strictly-higher check.

use super::geometry::direction;
use super::world::{ResourcePad, WorldSnapshot};

/// Score every candidate starts against (the floor of the dot product).
const INITIAL_BEST_SCORE: f32 = -1.0;

/// How well `pad` lies on the agent's way back to its own goal, in [-1, 1].
pub fn pad_alignment(world: &WorldSnapshot, pad: &ResourcePad) -> f32 {
    let me_to_pad = direction(&world.me.location, &pad.location);
    let pad_to_goal = direction(&pad.location, &world.own_goal);
    pad_to_goal.dot(&me_to_pad)
}

/// Pick the best active pad, or `None` when no pad is active.
///
/// Deterministic: ties keep the first pad in list order.
pub fn select_best_pad(world: &WorldSnapshot, alignment_margin: f32) -> Option<&ResourcePad> {
    let mut best: Option<&ResourcePad> = None;
    let mut best_score = INITIAL_BEST_SCORE;
    // highest raw score, used only when nothing clears the gate
    let mut fallback: Option<(&ResourcePad, f32)> = None;

    for pad in world.active_pads() {
        let score = pad_alignment(world, pad);
        let passes_gate = pad.is_large() || score > best_score + alignment_margin;
        tracing::trace!(location = ?pad.location, score, passes_gate, "pad scored");

        if passes_gate && score > best_score {
            best_score = score;
            best = Some(pad);
        }
        if fallback.map_or(true, |(_, s)| score > s) {
            fallback = Some((pad, score));
        }
    }

    // Small pads pointing almost straight away from goal (score <= -1 + margin)
    // never clear the gate against the initial score. An active pad still exists,
    // so hand back the least-bad one.
    best.or(fallback.map(|(pad, _)| pad))
}
