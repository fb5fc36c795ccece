//! Quick and dirty paddle AI, usable for either or both paddles
//!
//! Call with the paddle to drive and feed the result back in as that paddle's
//! velocity on the next tick.

use super::state::{GameState, Side};

/// Suggest a paddle velocity for the next tick
///
/// The paddle aims at a point offset from its centre. The offset is derived
/// from the total score plus `seed`, so it changes after every point but is
/// fully reproducible. Returns `±max_velocity` when the ball is further than
/// one step away from the aim point and `0.0` otherwise.
pub fn paddle_autopilot(state: &GameState, side: Side, max_velocity: f32, seed: i32) -> f32 {
    let paddle = state.paddle(side);
    let half = i64::from(state.table.half_paddle_height);

    let score_seed = i64::from(state.left.score) + i64::from(state.right.score) + i64::from(seed);
    let mut target_offset = ((score_seed + 1) * 7).rem_euclid(half);
    if score_seed.rem_euclid(2) == 1 {
        target_offset = -target_offset;
    }

    let dist = state.ball.pos.y - (paddle.center_y(&state.table) + target_offset as f32);
    if dist > max_velocity {
        max_velocity
    } else if dist < -max_velocity {
        -max_velocity
    } else {
        0.0
    }
}
