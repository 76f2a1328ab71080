//! Platform abstraction layer
//!
//! The simulation never talks to a window, keyboard or clock directly. It is
//! fed through these traits:
//! - [`Clock`]: elapsed time per tick
//! - [`Input`]: jump/restart press edges
//! - [`RandomSource`]: gap randomization
//!
//! Drawing goes through [`crate::renderer::Renderer`].

use rand::Rng;
use rand_pcg::Pcg32;

/// Frame timing source
pub trait Clock {
    /// Seconds since the previous tick. Monotonic, never negative.
    fn elapsed_since_last_tick(&mut self) -> f32;
}

/// Discrete input edges. Each method returns true at most once per physical
/// press, never while the key is held.
pub trait Input {
    fn jump_edge(&mut self) -> bool;
    fn restart_edge(&mut self) -> bool;
}

/// Uniform integer source, seeded once per process
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.random_range(low..=high)
    }
}

/// Clock that reports the same step every tick
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    step: f32,
}

impl FixedStepClock {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f32)
    }
}

impl Clock for FixedStepClock {
    fn elapsed_since_last_tick(&mut self) -> f32 {
        self.step
    }
}

/// One frame of pre-recorded input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub jump: bool,
    pub restart: bool,
}

/// Replays a fixed sequence of frames, then reports no input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<InputFrame>,
    cursor: usize,
    current: InputFrame,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputFrame>) -> Self {
        Self {
            frames,
            cursor: 0,
            current: InputFrame::default(),
        }
    }

    /// Advance to the next recorded frame. Call once per tick before polling.
    pub fn next_frame(&mut self) {
        self.current = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
    }
}

impl Input for ScriptedInput {
    fn jump_edge(&mut self) -> bool {
        std::mem::take(&mut self.current.jump)
    }

    fn restart_edge(&mut self) -> bool {
        std::mem::take(&mut self.current.restart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pcg_uniform_int_is_inclusive_and_seeded() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..1000 {
            let v = a.uniform_int(250, 252);
            assert!((250..=252).contains(&v));
            assert_eq!(v, b.uniform_int(250, 252));
        }
        assert_eq!(a.uniform_int(7, 7), 7);
    }

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = FixedStepClock::from_fps(60);
        assert!((clock.elapsed_since_last_tick() - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(FixedStepClock::new(-1.0).elapsed_since_last_tick(), 0.0);
    }

    #[test]
    fn test_scripted_input_edges_fire_once() {
        let mut input = ScriptedInput::new(vec![
            InputFrame {
                jump: true,
                restart: false,
            },
            InputFrame::default(),
        ]);
        input.next_frame();
        assert!(input.jump_edge());
        assert!(!input.jump_edge());
        input.next_frame();
        assert!(!input.jump_edge());
        input.next_frame();
        assert!(!input.restart_edge());
    }
}
