//! Simulation tick
//!
//! The game-state machine: PLAYING advances the world and evaluates it,
//! GAME_OVER only waits for a restart edge.

use serde::{Deserialize, Serialize};

use super::collision::{TerminalReason, evaluate};
use super::state::{GamePhase, GameState};
use crate::platform::RandomSource;

/// Input edges for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Jump pressed this tick
    pub jump: bool,
    /// Restart pressed this tick (only meaningful in GAME_OVER)
    pub restart: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub jumped: bool,
    /// Pipes passed this tick
    pub scored: u32,
    /// Pipes recycled this tick
    pub recycled: usize,
    pub game_over: Option<TerminalReason>,
    pub restarted: bool,
}

/// Advance the game state by one tick of `dt` seconds
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut impl RandomSource,
) -> TickEvents {
    let mut events = TickEvents::default();
    let dt = dt.max(0.0);
    state.time_ticks += 1;

    // Layers always update; scroll speed is zero after a game over
    state.background.update(dt, state.scroll_speed);
    state.ground.update(dt, state.scroll_speed);

    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                state.restart(rng);
                events.restarted = true;
                log::info!("Restarted at tick {}", state.time_ticks);
            }
        }
        GamePhase::Playing => {
            events.recycled = state.pipes.advance(dt, state.scroll_speed, rng);
            events.jumped = state.bird.update(dt, input.jump);

            let eval = evaluate(&state.bird, &mut state.pipes, state.config.bird.ceiling_y);
            if eval.passed > 0 {
                state.score += eval.passed;
                events.scored = eval.passed;
                log::debug!("Score: {}", state.score);
            }
            if let Some(reason) = eval.terminal {
                state.end_run(reason);
                events.game_over = Some(reason);
                log::info!(
                    "Game over ({}) with score {} at tick {}",
                    reason.as_str(),
                    state.score,
                    state.time_ticks
                );
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;

    fn new_game() -> (GameState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(12345);
        let state = GameState::new(GameConfig::default(), &mut rng);
        (state, rng)
    }

    #[test]
    fn test_initial_state() {
        let (state, _) = new_game();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.scroll_speed, 60.0);
        assert_eq!(state.pipes.len(), 5);
    }

    #[test]
    fn test_gravity_step_through_tick() {
        let (mut state, mut rng) = new_game();
        state.bird.set_motion(200.0, 0.0);

        tick(&mut state, &TickInput::default(), 0.1, &mut rng);

        assert!((state.bird.velocity() - 300.0).abs() < 1e-3);
        assert!((state.bird.pos().y - 230.0).abs() < 1e-3);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_obstacle_hit_ends_run_same_tick() {
        let (mut state, mut rng) = new_game();
        state.bird.set_motion(300.0, 0.0);
        {
            let front = state.pipes.front_mut();
            front.x = 170.0;
            front.gap_y = 250.0;
        }

        let events = tick(&mut state, &TickInput::default(), DT, &mut rng);

        assert_eq!(events.game_over, Some(TerminalReason::Obstacle));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.scroll_speed, 0.0);
        assert_eq!(state.last_terminal, Some(TerminalReason::Obstacle));
    }

    #[test]
    fn test_game_over_freezes_world() {
        let (mut state, mut rng) = new_game();
        state.end_run(TerminalReason::Ground);
        let bird_y = state.bird.pos().y;
        let pipes: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        let ground_x = state.ground.x;

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        for _ in 0..30 {
            let events = tick(&mut state, &jump, DT, &mut rng);
            assert_eq!(events, TickEvents::default());
        }

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.bird.pos().y, bird_y);
        assert_eq!(state.pipes.iter().map(|p| p.x).collect::<Vec<_>>(), pipes);
        assert_eq!(state.ground.x, ground_x);
    }

    #[test]
    fn test_ground_contact_ends_run() {
        let (mut state, mut rng) = new_game();
        state.bird.set_motion(450.0, 400.0);

        let events = tick(&mut state, &TickInput::default(), DT, &mut rng);

        assert_eq!(events.game_over, Some(TerminalReason::Ground));
        assert_eq!(state.scroll_speed, 0.0);
    }

    #[test]
    fn test_ceiling_ends_run() {
        let (mut state, mut rng) = new_game();
        state.bird.set_motion(-95.0, -600.0);

        let events = tick(&mut state, &TickInput::default(), DT, &mut rng);

        assert_eq!(events.game_over, Some(TerminalReason::Ceiling));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_falling_bird_eventually_hits_ground() {
        let (mut state, mut rng) = new_game();
        let mut ended = None;
        for _ in 0..600 {
            let events = tick(&mut state, &TickInput::default(), DT, &mut rng);
            if events.game_over.is_some() {
                ended = events.game_over;
                break;
            }
        }
        assert_eq!(ended, Some(TerminalReason::Ground));
    }

    #[test]
    fn test_score_once_per_pipe() {
        let (mut state, mut rng) = new_game();
        state.pipes.front_mut().x = 100.0;

        let events = tick(&mut state, &TickInput::default(), DT, &mut rng);
        assert_eq!(events.scored, 1);
        assert_eq!(state.score, 1);

        let events = tick(&mut state, &TickInput::default(), DT, &mut rng);
        assert_eq!(events.scored, 0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_restart_resets_everything() {
        let (mut state, mut rng) = new_game();
        state.score = 7;
        for pipe in state.pipes.iter_mut() {
            pipe.x -= 333.0;
            pipe.passed = true;
        }
        state.bird.set_motion(454.0, 0.0);
        state.end_run(TerminalReason::Ground);

        // Jump alone does not restart
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, DT, &mut rng);
        assert!(state.is_game_over());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let events = tick(&mut state, &restart, DT, &mut rng);

        assert!(events.restarted);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.scroll_speed, 60.0);
        assert_eq!(state.bird.pos(), state.config.bird_start());
        assert_eq!(state.bird.velocity(), -600.0);
        assert_eq!(state.pipes.len(), 5);
        for (i, pipe) in state.pipes.iter().enumerate() {
            assert!((pipe.x - (640.0 + i as f32 * state.pipes.interval())).abs() < 1e-3);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let (mut state, mut rng) = new_game();
        state.score = 3;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let events = tick(&mut state, &restart, DT, &mut rng);
        assert!(!events.restarted);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_determinism() {
        let (mut a, mut rng_a) = new_game();
        let (mut b, mut rng_b) = new_game();

        for i in 0..1200 {
            let input = TickInput {
                jump: i % 17 == 0,
                restart: i % 50 == 0,
            };
            tick(&mut a, &input, DT, &mut rng_a);
            tick(&mut b, &input, DT, &mut rng_b);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.bird.pos(), b.bird.pos());
        assert!(a.pipes.iter().eq(b.pipes.iter()));
    }
}
