//! Game configuration
//!
//! Every tunable number lives in one immutable [`GameConfig`] that is handed to
//! each component when it is constructed. Defaults reproduce the classic feel;
//! a JSON file can override any subset of fields.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Height of the header band above and the ground band below the playfield
    pub offset: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            offset: WINDOW_OFFSET,
        }
    }
}

impl WindowConfig {
    /// Full window height including both bands
    pub fn total_height(&self) -> f32 {
        self.height + 2.0 * self.offset
    }
}

/// Bird physics and sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdConfig {
    pub gravity: f32,
    pub jump_threshold_divisor: f32,
    pub jump_impulse_divisor: f32,
    pub ground_clearance: f32,
    pub ceiling_y: f32,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_threshold_divisor: JUMP_THRESHOLD_DIVISOR,
            jump_impulse_divisor: JUMP_IMPULSE_DIVISOR,
            ground_clearance: GROUND_CLEARANCE,
            ceiling_y: CEILING_Y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            scale: BIRD_SCALE,
        }
    }
}

impl BirdConfig {
    /// Minimum velocity at which a jump edge is honored
    #[inline]
    pub fn jump_threshold(&self) -> f32 {
        self.gravity / self.jump_threshold_divisor
    }

    /// Velocity set by a jump (negative = upward)
    #[inline]
    pub fn jump_impulse(&self) -> f32 {
        -self.gravity / self.jump_impulse_divisor
    }
}

/// Pipe pool layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    pub count: usize,
    pub width: f32,
    pub height: f32,
    pub interval: f32,
    pub gap_height: f32,
    pub recycle_margin: f32,
    pub visibility_cutoff: f32,
    pub spawn_gap_range: (i32, i32),
    pub recycle_gap_range: (i32, i32),
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            count: MAX_PIPES,
            width: PIPE_WIDTH,
            height: PIPE_HEIGHT,
            interval: PIPE_INTERVAL,
            gap_height: PIPE_GAP_HEIGHT,
            recycle_margin: PIPE_RECYCLE_MARGIN,
            visibility_cutoff: PIPE_VISIBILITY_CUTOFF,
            spawn_gap_range: SPAWN_GAP_RANGE,
            recycle_gap_range: RECYCLE_GAP_RANGE,
        }
    }
}

/// Scroll speed and parallax layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub speed: f32,
    pub background_speed_factor: f32,
    pub layer_scale: f32,
    pub background_width: f32,
    pub background_height: f32,
    pub ground_width: f32,
    pub ground_height: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            speed: SCROLL_SPEED,
            background_speed_factor: BACKGROUND_SPEED_FACTOR,
            layer_scale: LAYER_SCALE,
            background_width: BACKGROUND_WIDTH,
            background_height: BACKGROUND_HEIGHT,
            ground_width: GROUND_WIDTH,
            ground_height: GROUND_HEIGHT,
        }
    }
}

/// Frame loop settings (not used by the simulation itself)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// RNG seed; `None` seeds from the system clock at startup
    pub seed: Option<u64>,
    pub target_fps: u32,
    pub max_frame_dt: f32,
    /// Stop the headless runner after this many frames
    pub max_frames: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            target_fps: TARGET_FPS,
            max_frame_dt: MAX_FRAME_DT,
            max_frames: None,
        }
    }
}

impl RunConfig {
    /// Fixed step implied by the target frame rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub bird: BirdConfig,
    pub pipes: PipeConfig,
    pub scroll: ScrollConfig,
    pub run: RunConfig,
}

impl GameConfig {
    /// Load a config from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("malformed config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let w = &self.window;
        ensure!(
            w.width > 0.0 && w.height > 0.0 && w.offset >= 0.0,
            "window dimensions must be positive (got {}x{}, offset {})",
            w.width,
            w.height,
            w.offset
        );

        let b = &self.bird;
        ensure!(b.gravity > 0.0, "gravity must be positive (got {})", b.gravity);
        ensure!(
            b.jump_threshold_divisor > 0.0 && b.jump_impulse_divisor > 0.0,
            "jump divisors must be positive"
        );
        ensure!(
            b.width > 0.0 && b.height > 0.0 && b.scale > 0.0,
            "bird sprite size and scale must be positive"
        );

        let p = &self.pipes;
        ensure!(p.count > 0, "pipe count must be at least 1");
        ensure!(
            p.width > 0.0 && p.height > 0.0 && p.interval > 0.0,
            "pipe size and interval must be positive"
        );
        ensure!(
            p.spawn_gap_range.0 <= p.spawn_gap_range.1,
            "spawn gap range is inverted: {:?}",
            p.spawn_gap_range
        );
        ensure!(
            p.recycle_gap_range.0 <= p.recycle_gap_range.1,
            "recycle gap range is inverted: {:?}",
            p.recycle_gap_range
        );

        let s = &self.scroll;
        ensure!(s.speed >= 0.0, "scroll speed must not be negative (got {})", s.speed);
        ensure!(
            s.background_width > 0.0 && s.ground_width > 0.0 && s.layer_scale > 0.0,
            "layer sprites must have positive width and scale"
        );

        let r = &self.run;
        ensure!(r.target_fps > 0, "target fps must be at least 1");
        ensure!(r.max_frame_dt > 0.0, "max frame dt must be positive");
        Ok(())
    }

    /// The bird is grounded once its y reaches this line
    pub fn ground_y(&self) -> f32 {
        self.window.height + self.window.offset - self.bird.ground_clearance
    }

    /// Bird spawn point
    pub fn bird_start(&self) -> Vec2 {
        Vec2::new(
            self.window.width / 4.0,
            self.window.height / 3.0 + self.window.offset,
        )
    }

    /// Top edge of the ground strip
    pub fn ground_layer_y(&self) -> f32 {
        self.window.total_height() - self.scroll.ground_height
    }
}
