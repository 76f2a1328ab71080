//! Rendering module
//!
//! The game never touches a graphics API. [`scene::draw_frame`] turns a
//! [`GameState`](crate::sim::GameState) into calls on the [`Renderer`] trait;
//! a window backend implements the trait, tests use [`DrawList`].

pub mod draw_list;
pub mod scene;

pub use draw_list::{DrawCommand, DrawList};
pub use scene::draw_frame;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Pose, Rect};

/// Sprites the game draws. A backend maps each to a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Background,
    Ground,
    /// Pipe below the gap, opening facing up
    PipeLower,
    /// Pipe above the gap, drawn flipped
    PipeUpper,
    Bird(Pose),
}

impl SpriteId {
    /// Asset file conventionally backing this sprite
    pub fn asset_path(&self) -> &'static str {
        match self {
            SpriteId::Background => "sprites/background-day.png",
            SpriteId::Ground => "sprites/base.png",
            SpriteId::PipeLower | SpriteId::PipeUpper => "sprites/pipe-green.png",
            SpriteId::Bird(Pose::Neutral) => "sprites/bluebird-midflap.png",
            SpriteId::Bird(Pose::Rising) => "sprites/bluebird-downflap.png",
            SpriteId::Bird(Pose::Falling) => "sprites/bluebird-upflap.png",
        }
    }
}

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Half-transparent white wash over the playfield on game over
    pub const OVERLAY: Color = Color::rgba(255, 255, 255, 128);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized `[r, g, b, a]` for GPU backends
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Drawing collaborator. Calls are side-effect only.
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2, scale: f32);
    fn draw_rect(&mut self, bounds: Rect, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}
