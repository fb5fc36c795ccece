//! Game state and core simulation types
//!
//! Everything the tick and the sampler read or write lives here.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::TableSettings;

/// Which paddle (and which half of the table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// The ball (top-left corner position, table units per tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A paddle; only moves vertically
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Fixed per side
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Velocity applied on the last tick
    pub vel_y: f32,
    pub score: u32,
}

impl Paddle {
    fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vel_y: 0.0,
            score: 0,
        }
    }

    /// Vertical centre of the paddle
    #[inline]
    pub fn center_y(&self, table: &Table) -> f32 {
        self.y + table.half_paddle_height as f32
    }
}

/// Table geometry (fixed after init)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub screen_width: u32,
    pub screen_height: u32,
    pub ball_size: u32,
    pub paddle_width: u32,
    pub paddle_height: u32,
    /// `paddle_height / 2`, rounded down
    pub half_paddle_height: u32,
}

impl Table {
    /// Lowest y a paddle's top edge may reach
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        (self.screen_height - self.paddle_height) as f32
    }

    /// Table centre, where the ball is served from
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32 / 2.0, self.screen_height as f32 / 2.0)
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub table: Table,
    /// Clamp for bounce-induced vertical speed
    pub max_y_vel: f32,
    /// Ticks left in the score display pause
    pub(crate) score_display_ticks: u32,
    /// Next sub-frame to emit (0..SUBFRAMES_PER_CYCLE)
    pub(crate) subframe: u8,
}

impl GameState {
    /// Create a new game with both paddles centred and the ball served left
    ///
    /// Panics if `paddle_height < 2`: the bounce mapping and the autopilot
    /// both divide by half the paddle height.
    pub fn new(
        screen_height: u32,
        screen_width: u32,
        ball_size: u32,
        paddle_height: u32,
        paddle_width: u32,
        max_y_vel: f32,
    ) -> Self {
        assert!(
            paddle_height >= 2,
            "paddle_height must be at least 2 (got {paddle_height})"
        );
        assert!(
            screen_height >= paddle_height,
            "paddle ({paddle_height}) taller than table ({screen_height})"
        );

        let table = Table {
            screen_width,
            screen_height,
            ball_size,
            paddle_width,
            paddle_height,
            half_paddle_height: paddle_height / 2,
        };
        let paddle_y = (screen_height as f32 - paddle_height as f32) / 2.0;

        Self {
            ball: Ball {
                pos: table.center(),
                vel: Vec2::new(SERVE_VEL_X, SERVE_VEL_Y),
            },
            left: Paddle::new(LEFT_PADDLE_X, paddle_y),
            right: Paddle::new(screen_width as f32 - RIGHT_PADDLE_INSET, paddle_y),
            table,
            max_y_vel,
            score_display_ticks: 0,
            subframe: 0,
        }
    }

    pub fn from_settings(settings: &TableSettings) -> Self {
        Self::new(
            settings.screen_height,
            settings.screen_width,
            settings.ball_size,
            settings.paddle_height,
            settings.paddle_width,
            settings.max_y_vel,
        )
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// (left, right)
    pub fn scores(&self) -> (u32, u32) {
        (self.left.score, self.right.score)
    }

    /// True while play is frozen and the sampler shows the score
    pub fn is_showing_score(&self) -> bool {
        self.score_display_ticks > 0
    }

    pub fn score_display_ticks(&self) -> u32 {
        self.score_display_ticks
    }

    pub fn subframe_cursor(&self) -> u8 {
        self.subframe
    }

    /// Credit a point to `side` and re-serve toward the side that conceded
    pub(crate) fn award_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left.score += 1,
            Side::Right => self.right.score += 1,
        }
        log::info!(
            "{side} scored ({}-{})",
            self.left.score,
            self.right.score
        );
        log::debug!("Score display for {SCORE_DISPLAY_TICKS} ticks");

        self.score_display_ticks = SCORE_DISPLAY_TICKS;
        self.ball.pos = self.table.center();
        self.ball.vel.x = -self.ball.vel.x;
        self.ball.vel.y = RESTART_VEL_Y;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_settings(&TableSettings::default())
    }
}
