//! Sub-frame sampling
//!
//! The output device shows a single point at a time, so each call returns one
//! normalized coordinate and the host cycles through three of them fast enough
//! to look like a frame. During play the points are left paddle, ball and
//! right paddle. While the score is displayed they are the two table bounds
//! with a marker between them: the closer it sits to an edge, the further
//! ahead that player is. A tied game puts it exactly in the middle.

use glam::Vec2;

use super::state::{GameState, Paddle, Table};
use crate::consts::SUBFRAMES_PER_CYCLE;

/// Vertical line the score display is drawn on
const SCORE_LINE_Y: f32 = 0.5;

/// Emit the next sample and advance the cursor
///
/// The display mode is picked fresh on every call, so a mode change mid-cycle
/// does not disturb the 0, 1, 2 ordering.
pub fn next_subframe(state: &mut GameState) -> Vec2 {
    let cursor = state.subframe;
    let sample = if state.is_showing_score() {
        match cursor {
            0 => Vec2::new(0.0, SCORE_LINE_Y),
            1 => Vec2::new(score_ratio(state.left.score, state.right.score), SCORE_LINE_Y),
            _ => Vec2::new(1.0, SCORE_LINE_Y),
        }
    } else {
        let table = &state.table;
        match cursor {
            0 => paddle_sample(&state.left, table),
            1 => Vec2::new(
                state.ball.pos.x / table.screen_width as f32,
                state.ball.pos.y / table.screen_height as f32,
            ),
            _ => paddle_sample(&state.right, table),
        }
    };

    // Wrap after the last sample of the cycle
    state.subframe = if cursor + 1 >= SUBFRAMES_PER_CYCLE {
        0
    } else {
        cursor + 1
    };
    sample
}

/// Normalized position of the score marker in [0, 1)
///
/// Below 0.5 when the left player leads, above 0.5 when the right player does.
pub fn score_ratio(left_score: u32, right_score: u32) -> f32 {
    let ratio = (right_score as f32 + 1.0) / (left_score as f32 + 1.0);
    if ratio < 1.0 {
        ratio / 2.0
    } else {
        1.0 - (1.0 / ratio) / 2.0
    }
}

fn paddle_sample(paddle: &Paddle, table: &Table) -> Vec2 {
    Vec2::new(
        paddle.x / table.screen_width as f32,
        paddle.center_y(table) / table.screen_height as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCORE_DISPLAY_TICKS;
    use crate::sim::{TickInput, tick};

    fn state() -> GameState {
        GameState::new(480, 800, 10, 60, 10, 8.0)
    }

    #[test]
    fn test_live_samples() {
        let mut s = state();

        assert_eq!(next_subframe(&mut s), Vec2::new(10.0 / 800.0, 0.5));
        assert_eq!(s.subframe_cursor(), 1);
        assert_eq!(next_subframe(&mut s), Vec2::new(0.5, 0.5));
        assert_eq!(s.subframe_cursor(), 2);
        assert_eq!(next_subframe(&mut s), Vec2::new(780.0 / 800.0, 0.5));
        assert_eq!(s.subframe_cursor(), 0);
        // Next cycle starts over with the left paddle
        assert_eq!(next_subframe(&mut s), Vec2::new(10.0 / 800.0, 0.5));
    }

    #[test]
    fn test_score_display_samples() {
        let mut s = state();
        s.score_display_ticks = SCORE_DISPLAY_TICKS;
        s.right.score = 3;

        assert_eq!(next_subframe(&mut s), Vec2::new(0.0, 0.5));
        assert_eq!(next_subframe(&mut s), Vec2::new(0.875, 0.5));
        assert_eq!(next_subframe(&mut s), Vec2::new(1.0, 0.5));
        assert_eq!(s.subframe_cursor(), 0);
    }

    #[test]
    fn test_score_ratio_mapping() {
        assert_eq!(score_ratio(0, 0), 0.5);
        assert_eq!(score_ratio(5, 5), 0.5);
        assert_eq!(score_ratio(0, 3), 0.875);
        assert_eq!(score_ratio(3, 0), 0.125);
        assert!(score_ratio(10, 0) < score_ratio(3, 0));
        assert!(score_ratio(0, 10) > score_ratio(0, 3));
    }

    #[test]
    fn test_mode_switch_keeps_cursor_order() {
        let mut s = state();
        next_subframe(&mut s);
        assert_eq!(s.subframe_cursor(), 1);

        // A point is scored mid-cycle: the next sample is the score marker
        s.left.y = 0.0;
        s.ball.pos = glam::Vec2::new(3.0, 400.0);
        s.ball.vel = glam::Vec2::new(-5.0, 0.0);
        tick(&mut s, &TickInput::default());
        assert!(s.is_showing_score());

        assert_eq!(next_subframe(&mut s), Vec2::new(score_ratio(0, 1), 0.5));
        assert_eq!(next_subframe(&mut s), Vec2::new(1.0, 0.5));
        assert_eq!(next_subframe(&mut s), Vec2::new(0.0, 0.5));
    }

    #[test]
    fn test_ball_overshoot_is_not_clamped() {
        let mut s = state();
        s.ball.pos = glam::Vec2::new(400.0, 480.0);
        s.ball.vel = glam::Vec2::new(-5.0, 1.6);
        tick(&mut s, &TickInput::default());

        next_subframe(&mut s);
        let ball = next_subframe(&mut s);
        assert!(ball.y > 1.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The cursor walks 0, 1, 2 no matter how ticks and samples interleave
            #[test]
            fn prop_cursor_cycles(
                steps in prop::collection::vec((any::<bool>(), -8.0f32..8.0), 1..500)
            ) {
                let mut s = state();
                let mut expected = 0u8;
                for (do_tick, vel) in steps {
                    if do_tick {
                        tick(&mut s, &TickInput::new(vel, -vel));
                    } else {
                        prop_assert_eq!(s.subframe_cursor(), expected);
                        next_subframe(&mut s);
                        expected = (expected + 1) % SUBFRAMES_PER_CYCLE;
                        prop_assert_eq!(s.subframe_cursor(), expected);
                    }
                }
            }

            /// Score marker always lands strictly inside the bounds
            #[test]
            fn prop_score_ratio_in_range(left in 0u32..10_000, right in 0u32..10_000) {
                let r = score_ratio(left, right);
                prop_assert!(r > 0.0 && r < 1.0);
            }
        }
    }
}
