//! Frame composition
//!
//! Turns a `GameState` into draw calls, back to front. Sprites the host has
//! not loaded yet are skipped; layout that depends on their size treats
//! them as zero-sized.

use glam::Vec2;

use super::{Renderer, Sprite, TextAlign, TextStyle};
use crate::highscores::medal_for;
use crate::sim::{GamePhase, GameState};
use crate::settings::Settings;

/// Width of one score digit at full scale
const DIGIT_WIDTH: f32 = 24.0;
/// Top of the in-game score
const SCORE_Y: f32 = 20.0;
/// Scoreboard and its digits are drawn shrunk
const SCOREBOARD_SCALE: f32 = 0.35;
const MEDAL_SCALE: f32 = 0.3;

/// Draw one frame
pub fn draw(state: &GameState, settings: &Settings, r: &mut dyn Renderer) {
    let size = Vec2::new(settings.width, settings.height);

    r.set_global_alpha(1.0);
    r.draw_sprite(Sprite::Background(state.theme.background), Vec2::ZERO, Some(size));

    if state.is_started() {
        draw_pipes(state, settings, r);
    }

    draw_bird(state, r);
    draw_ground(state, settings, r);

    if state.is_started() {
        draw_number(r, state.score, size.x / 2.0, SCORE_Y, DIGIT_WIDTH, None);
    }

    match state.phase {
        GamePhase::NotStarted => draw_get_ready(size, r),
        GamePhase::Running => {}
        GamePhase::Ended => draw_game_over(state, settings, r),
    }
}

fn draw_pipes(state: &GameState, settings: &Settings, r: &mut dyn Renderer) {
    let color = state.theme.pipe;
    for pipe in &state.pipes {
        let top = pipe.top_rect(settings);
        let bottom = pipe.bottom_rect(settings);
        r.draw_sprite(Sprite::PipeDown(color), top.pos, None);
        r.draw_sprite(Sprite::PipeUp(color), bottom.pos, None);
    }
}

fn draw_bird(state: &GameState, r: &mut dyn Renderer) {
    let bird = &state.bird;
    // Dead birds stop flapping
    let frame = if bird.dead { 1 } else { bird.frame };
    let sprite = Sprite::Bird {
        color: state.theme.bird,
        frame,
    };
    r.draw_sprite_rotated(sprite, bird.center(), bird.tilt);
}

/// Two copies side by side so the strip wraps seamlessly
fn draw_ground(state: &GameState, settings: &Settings, r: &mut dyn Renderer) {
    let y = settings.floor_y();
    r.draw_sprite(Sprite::Base, Vec2::new(state.ground_offset, y), None);
    r.draw_sprite(
        Sprite::Base,
        Vec2::new(state.ground_offset + settings.width, y),
        None,
    );
}

fn draw_get_ready(size: Vec2, r: &mut dyn Renderer) {
    if let Some(msg) = r.sprite_size(Sprite::Message) {
        let pos = Vec2::new(size.x / 2.0 - msg.x / 2.0, size.y / 2.0 - msg.y / 2.0 - 50.0);
        r.draw_sprite(Sprite::Message, pos, None);
    }
    let style = TextStyle {
        align: TextAlign::Center,
        ..Default::default()
    };
    r.draw_text(
        "Tap or Space to Start",
        Vec2::new(size.x / 2.0, size.y / 2.0 + 50.0),
        &style,
    );
}

fn draw_game_over(state: &GameState, settings: &Settings, r: &mut dyn Renderer) {
    let center_x = settings.width / 2.0;

    let banner = r.sprite_size(Sprite::GameOver).unwrap_or(Vec2::ZERO);
    let banner_y = settings.height / 2.0 - banner.y - 100.0;
    r.draw_sprite(
        Sprite::GameOver,
        Vec2::new(center_x - banner.x / 2.0, banner_y),
        None,
    );

    r.set_global_alpha(state.overlay_alpha);

    let board_y = banner_y + banner.y + 60.0;
    let board = r.sprite_size(Sprite::ScoreBoard).unwrap_or(Vec2::ZERO) * SCOREBOARD_SCALE;
    r.draw_sprite(
        Sprite::ScoreBoard,
        Vec2::new(center_x - board.x / 2.0, board_y),
        Some(board),
    );

    let digit = DIGIT_WIDTH * SCOREBOARD_SCALE;
    let digit_size = Some(Vec2::splat(digit));
    let score_y = board_y + 20.0 * SCOREBOARD_SCALE;
    draw_number(r, state.score, center_x, score_y, digit, digit_size);
    let best = state.best_score.max(state.score);
    draw_number(r, best, center_x, score_y + 30.0 * SCOREBOARD_SCALE, digit, digit_size);

    if let Some(medal) = medal_for(state.score, &settings.medals) {
        let sprite = Sprite::Medal(medal);
        if let Some(natural) = r.sprite_size(sprite) {
            let scaled = natural * MEDAL_SCALE;
            r.draw_sprite(
                sprite,
                Vec2::new(center_x - scaled.x - 50.0, board_y + 10.0),
                Some(scaled),
            );
        }
    }

    r.set_global_alpha(1.0);
}

/// Draw `value` as digit sprites centered on `center_x`
fn draw_number(
    r: &mut dyn Renderer,
    value: u32,
    center_x: f32,
    y: f32,
    digit_width: f32,
    digit_size: Option<Vec2>,
) {
    let digits = value.to_string();
    let start_x = center_x - digits.len() as f32 * digit_width / 2.0;
    for (i, b) in digits.bytes().enumerate() {
        let pos = Vec2::new(start_x + i as f32 * digit_width, y);
        r.draw_sprite(Sprite::Digit(b - b'0'), pos, digit_size);
    }
}
