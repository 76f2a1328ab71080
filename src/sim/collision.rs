//! Collision and scoring evaluation
//!
//! Everything here is axis-aligned: the bird is a box, each pipe is a pair of
//! boxes around its gap. One evaluation per tick decides whether the run ends
//! (and why) and how many pipes were passed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipes::PipePool;

/// Axis-aligned rectangle (origin at top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalReason {
    /// Bird reached the ground line
    Ground,
    /// Bird flew past the top margin
    Ceiling,
    /// Bird hit a pipe
    Obstacle,
}

impl TerminalReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalReason::Ground => "ground",
            TerminalReason::Ceiling => "ceiling",
            TerminalReason::Obstacle => "obstacle",
        }
    }
}

/// Outcome of one evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub terminal: Option<TerminalReason>,
    /// Pipes newly marked as passed this tick
    pub passed: u32,
}

/// Check the bird against the world bounds and every pipe.
///
/// Ground and ceiling are checked first. Pipes are then walked front to back:
/// the first pipe the bird overlaps ends the walk with `Obstacle`; otherwise a
/// pipe whose trailing edge is left of the bird is marked passed (once per
/// lifetime between recycles).
pub fn evaluate(bird: &Bird, pipes: &mut PipePool, ceiling_y: f32) -> Evaluation {
    let mut eval = Evaluation::default();

    if !bird.in_air() {
        eval.terminal = Some(TerminalReason::Ground);
        return eval;
    }
    if bird.pos().y < ceiling_y {
        eval.terminal = Some(TerminalReason::Ceiling);
        return eval;
    }

    let bounds = bird.collision_bounds();
    let geometry = pipes.geometry();
    for pipe in pipes.iter_mut() {
        let (upper, lower) = geometry.gap_bounds(pipe);
        if bounds.overlaps(&upper) || bounds.overlaps(&lower) {
            eval.terminal = Some(TerminalReason::Obstacle);
            break;
        }

        if !pipe.passed && lower.right() < bounds.x {
            pipe.passed = true;
            eval.passed += 1;
        }
    }

    eval
}
