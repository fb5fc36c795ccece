//! Fixed timestep simulation tick
//!
//! One call advances paddles and ball by one step, unless the score display
//! pause is running.

use super::collision::{deflect_vel_y, hits_left_paddle, hits_right_paddle, hits_wall, paddle_offset};
use super::state::{GameState, Paddle, Side, Table};

/// Paddle velocities for a single tick (human input or autopilot)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub left_vel: f32,
    pub right_vel: f32,
}

impl TickInput {
    pub fn new(left_vel: f32, right_vel: f32) -> Self {
        Self {
            left_vel,
            right_vel,
        }
    }
}

/// Advance the game state by one tick
///
/// Returns the side that scored on this tick, if any.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<Side> {
    if state.score_display_ticks > 0 {
        state.score_display_ticks -= 1;
        if state.score_display_ticks == 0 {
            log::debug!("Score display over, resuming play");
        }
        return None;
    }

    state.left.vel_y = input.left_vel;
    state.right.vel_y = input.right_vel;
    move_paddle(&mut state.left, &state.table);
    move_paddle(&mut state.right, &state.table);

    move_ball(state)
}

/// Apply the paddle's velocity and clamp it onto the table
///
/// The velocity is kept as-is when the paddle hits an edge.
fn move_paddle(paddle: &mut Paddle, table: &Table) {
    paddle.y = (paddle.y + paddle.vel_y).clamp(0.0, table.max_paddle_y());
}

fn move_ball(state: &mut GameState) -> Option<Side> {
    let table = &state.table;
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Top and bottom walls
    if hits_wall(ball, table) {
        ball.vel.y = -ball.vel.y;
    }

    let left_offset = paddle_offset(ball, &state.left, table);
    let right_offset = paddle_offset(ball, &state.right, table);

    // Left paddle wins if both match
    if hits_left_paddle(ball, &state.left, table, left_offset) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = state.left.x + table.paddle_width as f32;
        ball.vel.y = deflect_vel_y(left_offset, table, state.max_y_vel);
    } else if hits_right_paddle(ball, &state.right, table, right_offset) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = state.right.x - table.ball_size as f32;
        ball.vel.y = deflect_vel_y(right_offset, table, state.max_y_vel);
    }

    let scorer = if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > table.screen_width as f32 {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(side) = scorer {
        state.award_point(side);
    }
    scorer
}
