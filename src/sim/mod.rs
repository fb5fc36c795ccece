//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - No hidden randomness (the autopilot takes its seed from the caller)
//! - No heap allocation on the tick or sample path
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod subframe;
pub mod tick;

pub use autopilot::paddle_autopilot;
pub use collision::{deflect_vel_y, hits_left_paddle, hits_right_paddle, hits_wall, paddle_offset};
pub use state::{Ball, GameState, Paddle, Side, Table};
pub use subframe::{next_subframe, score_ratio};
pub use tick::{TickInput, tick};
