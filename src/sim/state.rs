//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::collision::TerminalReason;
use super::pipes::PipePool;
use super::scroll::ScrollLayer;
use crate::config::GameConfig;
use crate::platform::RandomSource;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird and pipes are live
    #[default]
    Playing,
    /// Run ended, waiting for restart input
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u32,
    /// Horizontal scroll speed; zero whenever the phase is `GameOver`
    pub scroll_speed: f32,
    pub bird: Bird,
    pub pipes: PipePool,
    pub background: ScrollLayer,
    pub ground: ScrollLayer,
    /// Why the last run ended
    pub last_terminal: Option<TerminalReason>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game in the `Playing` phase
    pub fn new(config: GameConfig, rng: &mut impl RandomSource) -> Self {
        Self {
            phase: GamePhase::Playing,
            score: 0,
            scroll_speed: config.scroll.speed,
            bird: Bird::new(&config),
            pipes: PipePool::new(&config, rng),
            background: ScrollLayer::background(&config),
            ground: ScrollLayer::ground(&config),
            last_terminal: None,
            time_ticks: 0,
            config,
        }
    }

    /// End the run. Phase and scroll speed always change together.
    pub fn end_run(&mut self, reason: TerminalReason) {
        self.phase = GamePhase::GameOver;
        self.scroll_speed = 0.0;
        self.last_terminal = Some(reason);
    }

    /// Start a fresh run: score, scroll speed, bird and pipes all reset at once
    pub fn restart(&mut self, rng: &mut impl RandomSource) {
        self.score = 0;
        self.scroll_speed = self.config.scroll.speed;
        self.bird.reset();
        self.pipes.reset(rng);
        self.phase = GamePhase::Playing;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
