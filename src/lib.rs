//! Flappy - A side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Simulation (bird physics, pipe pool, collisions, game state)
//! - `config`: Immutable game configuration, loadable from JSON
//! - `platform`: Clock/input/renderer/RNG collaborator traits
//! - `renderer`: Scene composition into abstract draw calls
//! - `runner`: Frame loop tying input, simulation and rendering together

pub mod config;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod sim;

pub use config::GameConfig;
pub use runner::FrameRunner;

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Window dimensions (pixels). The playfield sits between two bands of
    /// `WINDOW_OFFSET` height, so the real window is `WINDOW_HEIGHT + 2 * WINDOW_OFFSET` tall.
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 480.0;
    pub const WINDOW_OFFSET: f32 = 64.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 3000.0;
    /// Jump is only honored when velocity >= GRAVITY / JUMP_THRESHOLD_DIVISOR
    pub const JUMP_THRESHOLD_DIVISOR: f32 = 30.0;
    /// Jump impulse is -GRAVITY / JUMP_IMPULSE_DIVISOR
    pub const JUMP_IMPULSE_DIVISOR: f32 = 5.0;
    /// Distance above the bottom band where the bird counts as grounded
    pub const GROUND_CLEARANCE: f32 = 90.0;
    /// Bird flying above this y is out of bounds
    pub const CEILING_Y: f32 = -100.0;

    /// Bird sprite (bluebird-*.png)
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;
    pub const BIRD_SCALE: f32 = 1.5;

    /// Pipe pool size
    pub const MAX_PIPES: usize = 5;
    /// Pipe sprite (pipe-green.png)
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 320.0;
    /// Horizontal distance between consecutive pipes
    pub const PIPE_INTERVAL: f32 = WINDOW_WIDTH / 3.0;
    /// Vertical opening between upper and lower pipe
    pub const PIPE_GAP_HEIGHT: f32 = 150.0;
    /// Pipes are recycled once x <= -width - PIPE_RECYCLE_MARGIN
    pub const PIPE_RECYCLE_MARGIN: f32 = 10.0;
    /// Pipes with gap_y at or past this are not drawn
    pub const PIPE_VISIBILITY_CUTOFF: f32 = 500.0;
    /// Gap range for freshly generated pipes (inclusive)
    pub const SPAWN_GAP_RANGE: (i32, i32) = (250, 450);
    /// Gap range for recycled pipes (inclusive)
    pub const RECYCLE_GAP_RANGE: (i32, i32) = (250, 500);

    /// Horizontal scroll speed while playing (pixels/s)
    pub const SCROLL_SPEED: f32 = 60.0;
    /// Background layer moves at a third of the scroll speed
    pub const BACKGROUND_SPEED_FACTOR: f32 = 1.0 / 3.0;
    pub const LAYER_SCALE: f32 = 1.1;
    /// background-day.png
    pub const BACKGROUND_WIDTH: f32 = 288.0;
    pub const BACKGROUND_HEIGHT: f32 = 512.0;
    /// base.png
    pub const GROUND_WIDTH: f32 = 336.0;
    pub const GROUND_HEIGHT: f32 = 112.0;

    /// Frame pacing for the headless runner
    pub const TARGET_FPS: u32 = 60;
    /// Clamp for a single frame's elapsed time (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
