//! Frame loop
//!
//! One frame = poll input, tick the simulation, draw. Everything runs on the
//! caller's thread; pacing to the target frame rate is up to the caller's clock.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::platform::{Clock, Input};
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{GameState, TickEvents, TickInput, tick};

/// Owns the game state and the process-wide RNG
#[derive(Debug, Clone)]
pub struct FrameRunner {
    state: GameState,
    rng: Pcg32,
    max_frame_dt: f32,
    frames: u64,
}

impl FrameRunner {
    /// Seed the RNG once and build the initial state
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(config, &mut rng);
        Self {
            state,
            rng,
            max_frame_dt: config.run.max_frame_dt,
            frames: 0,
        }
    }

    /// Run a single frame: input, simulation, then rendering
    pub fn run_frame(
        &mut self,
        clock: &mut impl Clock,
        input: &mut impl Input,
        renderer: &mut impl Renderer,
    ) -> TickEvents {
        // One step never covers more than max_frame_dt
        let dt = clock
            .elapsed_since_last_tick()
            .clamp(0.0, self.max_frame_dt);
        let tick_input = TickInput {
            jump: input.jump_edge(),
            restart: input.restart_edge(),
        };

        let events = tick(&mut self.state, &tick_input, dt, &mut self.rng);
        draw_frame(&self.state, renderer);

        self.frames += 1;
        log::trace!(
            "frame {} dt={:.4} phase={:?} score={}",
            self.frames,
            dt,
            self.state.phase,
            self.state.score
        );
        events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Seed derived from the wall clock, for runs without a configured seed
pub fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Frames the autopilot waits on the game-over screen before restarting
const RESTART_DELAY_FRAMES: u32 = 60;
/// Jump once the bird's bottom edge is this close above the lower pipe
const JUMP_CLEARANCE: f32 = 20.0;

/// Computer player for the headless demo.
///
/// Call [`Autopilot::observe`] with the current state before each frame; the
/// next polls then report the chosen edges.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    jump: bool,
    restart: bool,
    game_over_frames: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, state: &GameState) {
        self.jump = false;
        self.restart = false;

        if state.is_game_over() {
            self.game_over_frames += 1;
            if self.game_over_frames >= RESTART_DELAY_FRAMES {
                self.restart = true;
                self.game_over_frames = 0;
            }
            return;
        }
        self.game_over_frames = 0;

        let bird = &state.bird;
        let bounds = bird.collision_bounds();
        let geometry = state.pipes.geometry();
        // Lowest point the bird's bottom edge may reach without touching the ground
        let ground = state.config.ground_y() + bounds.height;
        // Aim at the first pipe whose trailing edge is still ahead of the bird
        let floor = state
            .pipes
            .iter()
            .find(|p| p.x + geometry.width >= bounds.x)
            .map_or(ground, |p| p.gap_y.min(ground));

        self.jump = bird.can_jump() && bounds.bottom() > floor - JUMP_CLEARANCE;
    }
}

impl Input for Autopilot {
    fn jump_edge(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }

    fn restart_edge(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }
}
