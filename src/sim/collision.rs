//! Collision detection and response for the ball
//!
//! All checks are axis-aligned and run after the ball has moved. There is no
//! position correction on wall hits; a paddle hit snaps the ball to the face.

use super::state::{Ball, Paddle, Table};

/// Signed distance from the ball's top edge to the paddle's centre
///
/// Negative when the ball is above the centre.
#[inline]
pub fn paddle_offset(ball: &Ball, paddle: &Paddle, table: &Table) -> f32 {
    ball.pos.y - paddle.center_y(table)
}

/// Vertical speed after a paddle hit
///
/// Linear in the hit offset: the centre returns the ball flat, the edges send
/// it off at `±max_y_vel`.
#[inline]
pub fn deflect_vel_y(offset: f32, table: &Table, max_y_vel: f32) -> f32 {
    (offset / table.half_paddle_height as f32) * max_y_vel
}

/// Ball touches the top or bottom wall
#[inline]
pub fn hits_wall(ball: &Ball, table: &Table) -> bool {
    ball.pos.y <= 0.0 || ball.pos.y >= (table.screen_height as f32 - table.ball_size as f32)
}

/// Ball vertically overlaps the paddle face
#[inline]
fn in_paddle_span(ball: &Ball, paddle: &Paddle, table: &Table, offset: f32) -> bool {
    ball.pos.y + table.ball_size as f32 >= paddle.y
        && offset.abs() < table.half_paddle_height as f32
}

/// Ball reached the left paddle's face (right edge of the paddle)
#[inline]
pub fn hits_left_paddle(ball: &Ball, paddle: &Paddle, table: &Table, offset: f32) -> bool {
    ball.pos.x <= paddle.x + table.paddle_width as f32 && in_paddle_span(ball, paddle, table, offset)
}

/// Ball's right edge reached the right paddle's face (left edge of the paddle)
#[inline]
pub fn hits_right_paddle(ball: &Ball, paddle: &Paddle, table: &Table, offset: f32) -> bool {
    ball.pos.x + table.ball_size as f32 >= paddle.x && in_paddle_span(ball, paddle, table, offset)
}
