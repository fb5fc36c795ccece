//! Pointer Pong - two-paddle Pong rendered through pointer samples
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, autopilot, sub-frame sampling)
//! - `settings`: Table geometry configuration

pub mod settings;
pub mod sim;

pub use settings::{SettingsError, TableSettings};
pub use sim::{GameState, Side, TickInput, next_subframe, paddle_autopilot, tick};

/// Game configuration constants
pub mod consts {
    /// Ticks the simulation stays frozen while the score is displayed
    pub const SCORE_DISPLAY_TICKS: u32 = 80;

    /// Initial serve (toward the left paddle)
    pub const SERVE_VEL_X: f32 = -5.0;
    pub const SERVE_VEL_Y: f32 = 1.6;
    /// Vertical speed the ball restarts with after a point
    pub const RESTART_VEL_Y: f32 = 1.0;

    /// Paddle x positions: left is absolute, right is inset from the right edge
    pub const LEFT_PADDLE_X: f32 = 10.0;
    pub const RIGHT_PADDLE_INSET: f32 = 20.0;

    /// Samples in one full display cycle (left paddle, ball, right paddle)
    pub const SUBFRAMES_PER_CYCLE: u8 = 3;
}
