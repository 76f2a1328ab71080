//! Pipe pool
//!
//! A fixed number of pipe pairs stream right-to-left. Storage is a ring: the
//! slot at `head` is the pipe nearest the left edge, and recycling rewrites that
//! slot in place and advances `head`, which makes it the back of the stream.
//! Nothing is allocated after [`PipePool::reset`].

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;
use crate::platform::RandomSource;

/// One upper/lower pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Top of the lower pipe; the opening extends `gap_height` above it
    pub gap_y: f32,
    /// Set once the bird has flown past this pipe
    pub passed: bool,
}

/// Shared pipe dimensions, needed to turn a [`Pipe`] into rectangles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeGeometry {
    pub width: f32,
    pub height: f32,
    pub gap_height: f32,
    /// Upper solids start here (bottom of the header band)
    pub top: f32,
    /// Lower solids end here
    pub floor: f32,
}

impl PipeGeometry {
    /// Solid region above the gap
    pub fn upper_bounds(&self, pipe: &Pipe) -> Rect {
        Rect::new(
            pipe.x,
            self.top,
            self.width,
            pipe.gap_y - self.gap_height - self.top,
        )
    }

    /// Solid region below the gap
    pub fn lower_bounds(&self, pipe: &Pipe) -> Rect {
        Rect::new(pipe.x, pipe.gap_y, self.width, self.floor - pipe.gap_y)
    }

    /// `(upper, lower)` solid rectangles
    pub fn gap_bounds(&self, pipe: &Pipe) -> (Rect, Rect) {
        (self.upper_bounds(pipe), self.lower_bounds(pipe))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipePool {
    slots: Vec<Pipe>,
    head: usize,
    count: usize,
    geometry: PipeGeometry,
    start_x: f32,
    interval: f32,
    recycle_margin: f32,
    visibility_cutoff: f32,
    spawn_gap_range: (i32, i32),
    recycle_gap_range: (i32, i32),
}

impl PipePool {
    pub fn new(config: &GameConfig, rng: &mut impl RandomSource) -> Self {
        let p = &config.pipes;
        let mut pool = Self {
            slots: Vec::with_capacity(p.count),
            head: 0,
            count: p.count,
            geometry: PipeGeometry {
                width: p.width,
                height: p.height,
                gap_height: p.gap_height,
                top: config.window.offset,
                floor: config.window.height + config.window.offset,
            },
            start_x: config.window.width,
            interval: p.interval,
            recycle_margin: p.recycle_margin,
            visibility_cutoff: p.visibility_cutoff,
            spawn_gap_range: p.spawn_gap_range,
            recycle_gap_range: p.recycle_gap_range,
        };
        pool.reset(rng);
        pool
    }

    /// Regenerate the full pool at even spacing from the right edge
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        self.slots.clear();
        self.head = 0;
        let (low, high) = self.spawn_gap_range;
        for i in 0..self.count {
            self.slots.push(Pipe {
                x: self.start_x + i as f32 * self.interval,
                gap_y: rng.uniform_int(low, high) as f32,
                passed: false,
            });
        }
    }

    /// Scroll every pipe left by `velocity * dt`, then recycle all pipes that
    /// left the screen. Returns how many were recycled.
    pub fn advance(&mut self, dt: f32, velocity: f32, rng: &mut impl RandomSource) -> usize {
        let dx = velocity * dt;
        for pipe in &mut self.slots {
            pipe.x -= dx;
        }

        // Positions increase front to back, so spent pipes form a prefix
        let spent = self.iter().take_while(|p| self.needs_recycle(p)).count();
        debug_assert_eq!(
            spent,
            self.iter().filter(|p| self.needs_recycle(p)).count(),
            "pipe order broken"
        );

        for _ in 0..spent {
            self.recycle_front(rng);
        }
        spent
    }

    /// Move the front pipe behind the last one with a fresh gap
    pub fn recycle_front(&mut self, rng: &mut impl RandomSource) -> Pipe {
        let x = self.max_x() + self.interval;
        let (low, high) = self.recycle_gap_range;
        let gap_y = rng.uniform_int(low, high) as f32;

        let slot = &mut self.slots[self.head];
        *slot = Pipe {
            x,
            gap_y,
            passed: false,
        };
        let recycled = *slot;
        self.head = (self.head + 1) % self.slots.len();

        log::debug!("Recycled pipe to x={:.1}, gap_y={}", recycled.x, recycled.gap_y);
        recycled
    }

    /// Whether the pipe has scrolled to (or past) `recycle_margin` pixels
    /// beyond the left edge
    #[inline]
    pub fn needs_recycle(&self, pipe: &Pipe) -> bool {
        pipe.x <= -self.geometry.width - self.recycle_margin
    }

    /// Pipes whose gap sits at or below the cutoff are not drawn. They still
    /// collide and score.
    #[inline]
    pub fn is_visible(&self, pipe: &Pipe) -> bool {
        pipe.gap_y < self.visibility_cutoff
    }

    pub fn gap_bounds(&self, pipe: &Pipe) -> (Rect, Rect) {
        self.geometry.gap_bounds(pipe)
    }

    pub fn geometry(&self) -> PipeGeometry {
        self.geometry
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Pipes in stream order, leftmost first
    pub fn iter(&self) -> impl Iterator<Item = &Pipe> + '_ {
        let (before, after) = self.slots.split_at(self.head);
        after.iter().chain(before.iter())
    }

    /// Mutable pipes in stream order, leftmost first
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pipe> + '_ {
        let (before, after) = self.slots.split_at_mut(self.head);
        after.iter_mut().chain(before.iter_mut())
    }

    pub fn front(&self) -> &Pipe {
        &self.slots[self.head]
    }

    pub fn front_mut(&mut self) -> &mut Pipe {
        &mut self.slots[self.head]
    }

    pub fn back(&self) -> &Pipe {
        let n = self.slots.len();
        &self.slots[(self.head + n - 1) % n]
    }

    /// Rightmost pipe position
    pub fn max_x(&self) -> f32 {
        self.slots
            .iter()
            .map(|p| p.x)
            .fold(f32::NEG_INFINITY, f32::max)
    }
}
