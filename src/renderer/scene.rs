//! Scene composition
//!
//! Draw order, back to front: background, pipes, ground, bird (or the game-over
//! panel), then the header bar with title and score.

use glam::Vec2;

use super::{Color, Renderer, SpriteId};
use crate::sim::{GamePhase, GameState, Rect, ScrollLayer};

pub const TITLE: &str = "Flappy Bird";
pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const RESTART_HINT: &str = "Press [Space] to restart.";

const TITLE_SIZE: f32 = 40.0;
const HINT_SIZE: f32 = 20.0;
const TEXT_MARGIN: f32 = 10.0;
/// Score is right-aligned this far from the window edge
const SCORE_INSET: f32 = 60.0;
const HEADER_LINE_THICKNESS: f32 = 4.0;

/// Draw the full frame for the current state
pub fn draw_frame(state: &GameState, renderer: &mut impl Renderer) {
    draw_layer(&state.background, SpriteId::Background, renderer);
    draw_pipes(state, renderer);
    draw_layer(&state.ground, SpriteId::Ground, renderer);

    match state.phase {
        GamePhase::Playing => {
            let bird = &state.bird;
            renderer.draw_sprite(SpriteId::Bird(bird.pose()), bird.pos(), bird.scale());
        }
        GamePhase::GameOver => draw_game_over(state, renderer),
    }

    draw_header(state, renderer);
}

fn draw_layer(layer: &ScrollLayer, sprite: SpriteId, renderer: &mut impl Renderer) {
    for pos in layer.tile_positions() {
        renderer.draw_sprite(sprite, pos, layer.scale);
    }
}

fn draw_pipes(state: &GameState, renderer: &mut impl Renderer) {
    let geometry = state.pipes.geometry();
    for pipe in state.pipes.iter().filter(|p| state.pipes.is_visible(p)) {
        renderer.draw_sprite(SpriteId::PipeLower, Vec2::new(pipe.x, pipe.gap_y), 1.0);
        // Upper sprite ends where the gap begins
        let upper_y = pipe.gap_y - geometry.gap_height - geometry.height;
        renderer.draw_sprite(SpriteId::PipeUpper, Vec2::new(pipe.x, upper_y), 1.0);
    }
}

fn draw_game_over(state: &GameState, renderer: &mut impl Renderer) {
    let window = &state.config.window;
    renderer.draw_rect(
        Rect::new(0.0, window.offset, window.width, window.height + window.offset),
        Color::OVERLAY,
    );

    let top = 2.0 * window.height / 3.0;
    renderer.draw_text(
        GAME_OVER_TEXT,
        Vec2::new(TEXT_MARGIN, top),
        TITLE_SIZE,
        Color::BLACK,
    );
    renderer.draw_text(
        &format!("Score: {}", state.score),
        Vec2::new(TEXT_MARGIN, top + TITLE_SIZE),
        TITLE_SIZE,
        Color::BLACK,
    );
    renderer.draw_text(
        RESTART_HINT,
        Vec2::new(TEXT_MARGIN, top + 2.0 * TITLE_SIZE),
        HINT_SIZE,
        Color::BLACK,
    );
}

fn draw_header(state: &GameState, renderer: &mut impl Renderer) {
    let window = &state.config.window;
    renderer.draw_rect(Rect::new(0.0, 0.0, window.width, window.offset), Color::WHITE);
    renderer.draw_rect(
        Rect::new(
            0.0,
            window.offset - HEADER_LINE_THICKNESS,
            window.width,
            HEADER_LINE_THICKNESS,
        ),
        Color::BLACK,
    );
    renderer.draw_text(
        TITLE,
        Vec2::new(TEXT_MARGIN, TEXT_MARGIN),
        TITLE_SIZE,
        Color::BLACK,
    );
    renderer.draw_text(
        &state.score.to_string(),
        Vec2::new(window.width - SCORE_INSET, TEXT_MARGIN),
        TITLE_SIZE,
        Color::BLACK,
    );
}
