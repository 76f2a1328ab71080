//! Flappy entry point
//!
//! Native builds run the game headless: a fixed-step clock, the autopilot as
//! the player and a draw list standing in for the window. An optional JSON
//! config path is the only argument.

use anyhow::Result;

use flappy::GameConfig;
use flappy::platform::FixedStepClock;
use flappy::renderer::DrawList;
use flappy::runner::{Autopilot, FrameRunner, seed_from_clock};

/// Frames to run when the config sets no limit (one minute at 60 fps)
const DEFAULT_DEMO_FRAMES: u64 = 60 * 60;

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };
    let seed = config.run.seed.unwrap_or_else(seed_from_clock);
    log::info!("Flappy (headless) starting with seed {}", seed);

    let mut runner = FrameRunner::new(config, seed);
    let mut clock = FixedStepClock::from_fps(config.run.target_fps);
    let mut pilot = Autopilot::new();
    let mut frame = DrawList::new();

    let max_frames = config.run.max_frames.unwrap_or(DEFAULT_DEMO_FRAMES);
    let mut runs = 0u32;
    let mut best = 0u32;
    for _ in 0..max_frames {
        pilot.observe(runner.state());
        frame.clear();
        let events = runner.run_frame(&mut clock, &mut pilot, &mut frame);

        if events.game_over.is_some() {
            runs += 1;
            best = best.max(runner.state().score);
        }
    }

    // Count an unfinished run too
    if !runner.state().is_game_over() {
        best = best.max(runner.state().score);
    }
    log::info!(
        "Finished {} frames: {} runs ended, best score {}",
        runner.frames(),
        runs,
        best
    );
    Ok(())
}
