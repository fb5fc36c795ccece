//! Pointer Pong demo host
//!
//! Runs autopilot against autopilot and writes the pointer samples to stdout,
//! one `x y` pair per line.
//!
//! Usage: `pointer-pong [settings.json] [ticks]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use pointer_pong::consts::SUBFRAMES_PER_CYCLE;
use pointer_pong::{GameState, Side, TableSettings, TickInput, next_subframe, paddle_autopilot, tick};

/// Ticks to run when none are given
const DEFAULT_TICKS: u32 = 600;
/// Autopilot paddle speed (table units per tick)
const AUTOPILOT_MAX_VEL: f32 = 6.0;
/// Seed for the autopilot aim jitter
const DEMO_SEED: u64 = 0x5EED;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => TableSettings::load_or_default(path),
        None => TableSettings::default(),
    };
    let ticks = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_TICKS);

    log::info!(
        "Pointer Pong starting: {}x{} table, {ticks} ticks",
        settings.screen_width,
        settings.screen_height
    );

    let mut state = GameState::from_settings(&settings);
    let mut rng = Pcg32::seed_from_u64(DEMO_SEED);
    let mut input = TickInput::default();

    for _ in 0..ticks {
        tick(&mut state, &input);

        for _ in 0..SUBFRAMES_PER_CYCLE {
            let sample = next_subframe(&mut state);
            println!("{:.4} {:.4}", sample.x, sample.y);
        }

        input = TickInput::new(
            paddle_autopilot(&state, Side::Left, AUTOPILOT_MAX_VEL, rng.random_range(0..64)),
            paddle_autopilot(&state, Side::Right, AUTOPILOT_MAX_VEL, rng.random_range(0..64)),
        );
    }

    let (left, right) = state.scores();
    log::info!("Final score {left}-{right}");
    match serde_json::to_string(&state) {
        Ok(json) => log::debug!("Final state: {json}"),
        Err(e) => log::warn!("Could not serialize final state: {e}"),
    }
}
