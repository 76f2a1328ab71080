//! The player-controlled bird
//!
//! Vertical-only physics: x never changes, y falls under gravity and jumps
//! replace the velocity outright.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::{BirdConfig, GameConfig};

/// Sprite pose, derived each tick from the jump edge and whether the bird is airborne
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pose {
    /// On the ground (mid-flap sprite)
    #[default]
    Neutral,
    /// Jumped this tick (down-flap sprite)
    Rising,
    /// Airborne without a jump (up-flap sprite)
    Falling,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pos: Vec2,
    velocity: f32,
    pose: Pose,
    tuning: BirdConfig,
    start: Vec2,
    ground_y: f32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        let mut bird = Self {
            pos: Vec2::ZERO,
            velocity: 0.0,
            pose: Pose::Neutral,
            tuning: config.bird,
            start: config.bird_start(),
            ground_y: config.ground_y(),
        };
        bird.reset();
        bird
    }

    /// Advance one tick.
    ///
    /// A jump edge is honored only when `velocity >= gravity / jump_threshold_divisor`;
    /// it then replaces the velocity and gravity is skipped for this tick.
    /// Position is integrated after the velocity change.
    pub fn update(&mut self, dt: f32, jump_edge: bool) -> bool {
        let jumped = jump_edge && self.can_jump();
        if jumped {
            self.velocity = self.tuning.jump_impulse();
            self.pose = Pose::Rising;
        } else if self.in_air() {
            self.velocity += self.tuning.gravity * dt;
            self.pose = Pose::Falling;
        } else {
            self.pose = Pose::Neutral;
        }

        self.pos.y += self.velocity * dt;
        jumped
    }

    /// Whether a jump edge would be honored right now
    #[inline]
    pub fn can_jump(&self) -> bool {
        self.velocity >= self.tuning.jump_threshold()
    }

    /// True while above the ground line
    #[inline]
    pub fn in_air(&self) -> bool {
        self.pos.y < self.ground_y
    }

    /// Collision box at the current position, sized to the unscaled sprite
    pub fn collision_bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.tuning.width, self.tuning.height)
    }

    /// Back to the spawn point, already rising
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.velocity = self.tuning.jump_impulse();
        self.pose = Pose::Neutral;
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn scale(&self) -> f32 {
        self.tuning.scale
    }

    #[cfg(test)]
    pub(crate) fn set_motion(&mut self, y: f32, velocity: f32) {
        self.pos.y = y;
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird() -> Bird {
        Bird::new(&GameConfig::default())
    }

    #[test]
    fn test_gravity_then_position() {
        let mut b = bird();
        b.set_motion(200.0, 0.0);

        let jumped = b.update(0.1, false);

        assert!(!jumped);
        assert!((b.velocity() - 300.0).abs() < 1e-3);
        assert!((b.pos().y - 230.0).abs() < 1e-3);
        assert_eq!(b.pose(), Pose::Falling);
    }

    #[test]
    fn test_jump_overrides_gravity() {
        let mut b = bird();
        b.set_motion(200.0, 150.0);

        assert!(b.update(0.1, true));

        assert_eq!(b.velocity(), -600.0);
        assert!((b.pos().y - 140.0).abs() < 1e-3);
        assert_eq!(b.pose(), Pose::Rising);
    }

    #[test]
    fn test_jump_threshold_is_inclusive() {
        let mut b = bird();
        b.set_motion(200.0, 100.0);
        assert!(b.update(0.0, true));
        assert_eq!(b.velocity(), -600.0);
    }

    #[test]
    fn test_jump_below_threshold_is_ignored() {
        let mut b = bird();
        b.set_motion(200.0, 99.0);

        assert!(!b.update(0.01, true));

        // Plain gravity step
        assert!((b.velocity() - 129.0).abs() < 1e-3);
        assert_eq!(b.pose(), Pose::Falling);
    }

    #[test]
    fn test_no_jump_while_rising() {
        let mut b = bird();
        // Fresh bird starts mid-rise
        assert_eq!(b.velocity(), -600.0);
        assert!(!b.update(1.0 / 60.0, true));
        assert!(b.velocity() < 0.0);
    }

    #[test]
    fn test_grounded_bird_has_no_gravity() {
        let mut b = bird();
        b.set_motion(454.0, 0.0);
        assert!(!b.in_air());

        b.update(0.1, false);

        assert_eq!(b.velocity(), 0.0);
        assert_eq!(b.pos().y, 454.0);
        assert_eq!(b.pose(), Pose::Neutral);
    }

    #[test]
    fn test_in_air_boundary() {
        let mut b = bird();
        b.set_motion(453.9, 0.0);
        assert!(b.in_air());
        b.set_motion(454.0, 0.0);
        assert!(!b.in_air());
    }

    #[test]
    fn test_collision_bounds_follow_position() {
        let mut b = bird();
        b.set_motion(300.0, 0.0);
        assert_eq!(b.collision_bounds(), Rect::new(160.0, 300.0, 34.0, 24.0));
    }

    #[test]
    fn test_reset() {
        let mut b = bird();
        b.set_motion(400.0, 900.0);
        b.update(0.1, false);

        b.reset();

        assert_eq!(b.pos(), Vec2::new(160.0, 224.0));
        assert_eq!(b.velocity(), -600.0);
        assert_eq!(b.pose(), Pose::Neutral);
    }
}
