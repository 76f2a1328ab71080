//! Recording renderer
//!
//! Stores draw calls instead of executing them. Used by the headless runner and
//! tests; the buffer keeps its capacity across frames.

use glam::Vec2;

use super::{Color, Renderer, SpriteId};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: SpriteId,
        pos: Vec2,
        scale: f32,
    },
    Rect {
        bounds: Rect,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Positions of every draw of `sprite`, in draw order
    pub fn sprite_positions(&self, sprite: SpriteId) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Sprite { sprite: s, pos, .. } if *s == sprite => Some(*pos),
                _ => None,
            })
            .collect()
    }

    /// All text strings, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for DrawList {
    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2, scale: f32) {
        self.commands.push(DrawCommand::Sprite { sprite, pos, scale });
    }

    fn draw_rect(&mut self, bounds: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { bounds, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            pos,
            size,
            color,
        });
    }
}
