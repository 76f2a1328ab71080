//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Time arrives as an explicit `dt`
//! - Randomness arrives through `RandomSource`
//! - Pipes are processed in stream order (leftmost first)

pub mod bird;
pub mod collision;
pub mod pipes;
pub mod scroll;
pub mod state;
pub mod tick;

pub use bird::{Bird, Pose};
pub use collision::{Evaluation, Rect, TerminalReason, evaluate};
pub use pipes::{Pipe, PipeGeometry, PipePool};
pub use scroll::ScrollLayer;
pub use state::{GamePhase, GameState};
pub use tick::{TickEvents, TickInput, tick};
