//! Parallax scroll layers (background and ground)
//!
//! Purely visual: a strip tiled three times and wrapped by one tile width.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Number of tiles drawn per layer; enough to cover the window at any offset
pub const LAYER_TILES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollLayer {
    /// Left edge of the first tile (always in `(-tile_width, 0]`)
    pub x: f32,
    pub y: f32,
    /// Scaled sprite width
    pub tile_width: f32,
    /// Fraction of the game scroll speed this layer moves at
    pub speed_factor: f32,
    pub scale: f32,
}

impl ScrollLayer {
    pub fn new(y: f32, sprite_width: f32, scale: f32, speed_factor: f32) -> Self {
        Self {
            x: 0.0,
            y,
            tile_width: sprite_width * scale,
            speed_factor,
            scale,
        }
    }

    pub fn background(config: &GameConfig) -> Self {
        let s = &config.scroll;
        Self::new(0.0, s.background_width, s.layer_scale, s.background_speed_factor)
    }

    pub fn ground(config: &GameConfig) -> Self {
        let s = &config.scroll;
        Self::new(config.ground_layer_y(), s.ground_width, s.layer_scale, 1.0)
    }

    pub fn update(&mut self, dt: f32, scroll_speed: f32) {
        self.x -= scroll_speed * self.speed_factor * dt;
        while self.x <= -self.tile_width {
            self.x += self.tile_width;
        }
    }

    /// Top-left corner of each tile, left to right
    pub fn tile_positions(&self) -> [Vec2; LAYER_TILES] {
        std::array::from_fn(|i| Vec2::new(self.x + i as f32 * self.tile_width, self.y))
    }
}
