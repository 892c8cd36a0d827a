//! Full game loop with recording collaborators

use flappy::audio::{AudioManager, SoundEffect};
use flappy::persistence::{MemoryStore, PersistentStore};
use flappy::platform::{
    DrawCommand, FrameBudget, InputEvent, RecordingAudio, RecordingRenderer, ScriptedInput,
};
use flappy::renderer::Sprite;
use flappy::sim::{GamePhase, Pipe};
use flappy::{BEST_SCORE_KEY, Game, Settings};
use glam::Vec2;

fn game_with(store: MemoryStore, audio: AudioManager) -> Game {
    Game::new(7, Settings::default(), Box::new(store), audio)
}

#[test]
fn scored_round_persists_best() {
    let mut game = game_with(MemoryStore::new(), AudioManager::disabled());
    game.flap();
    // One pipe about to be passed, one the bird flies into
    game.state.pipes.push(Pipe::new(-1.0, 300.0));
    game.state.pipes.push(Pipe::new(62.0, 100.0));
    game.update();

    assert_eq!(game.phase(), GamePhase::Ended);
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.last_score(), Some(1));
    assert_eq!(game.store().get_integer(BEST_SCORE_KEY), Some(1));
}

#[test]
fn lower_score_keeps_stored_best() {
    let mut store = MemoryStore::new();
    store.set_integer(BEST_SCORE_KEY, 12);
    let mut game = game_with(store, AudioManager::disabled());
    assert_eq!(game.state.best_score, 12);

    game.flap();
    game.state.pipes.push(Pipe::new(-1.0, 300.0));
    game.state.pipes.push(Pipe::new(62.0, 100.0));
    game.update();

    assert_eq!(game.last_score(), Some(1));
    assert_eq!(game.high_scores.best, 12);
    assert_eq!(game.store().get_integer(BEST_SCORE_KEY), Some(12));
}

#[test]
fn negative_stored_best_loads_as_zero() {
    let mut store = MemoryStore::new();
    store.set_integer(BEST_SCORE_KEY, -4);
    let game = game_with(store, AudioManager::disabled());
    assert_eq!(game.high_scores.best, 0);
    assert_eq!(game.state.best_score, 0);
}

#[test]
fn sounds_follow_round_lifecycle() {
    let audio = RecordingAudio::new();
    let mut game = game_with(MemoryStore::new(), AudioManager::new(Box::new(audio.clone())));
    let mut renderer = RecordingRenderer::with_standard_assets(&game.settings);
    // Start, flap once, fall to the ground, then dismiss the scoreboard
    let mut input = ScriptedInput::flaps([0, 1]).at(
        200,
        InputEvent::PointerDown {
            pos: Vec2::new(200.0, 300.0),
        },
    );

    let frames = game.run(&mut FrameBudget::new(201), &mut input, &mut renderer);

    assert_eq!(frames, 201);
    assert_eq!(
        audio.played(),
        vec![
            SoundEffect::Wing,
            SoundEffect::Hit,
            SoundEffect::Die,
            SoundEffect::Swoosh
        ]
    );
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert_eq!(game.state.round, 2);
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.last_score(), Some(0));
}

#[test]
fn autopilot_rounds_keep_best_consistent() {
    let mut game = game_with(MemoryStore::new(), AudioManager::disabled());
    game.set_autopilot(true);
    let mut renderer = RecordingRenderer::with_standard_assets(&game.settings);
    let mut input = ScriptedInput::new();

    for _ in 0..20_000 {
        if game.phase() == GamePhase::Ended && game.state.overlay_alpha >= 1.0 {
            game.flap();
        }
        renderer.clear();
        game.frame(&mut input, &mut renderer);
    }

    let best = game.session_best();
    assert_eq!(game.high_scores.best, best);
    if best > 0 {
        assert_eq!(game.store().get_integer(BEST_SCORE_KEY), Some(i64::from(best)));
    }
    // Every frame starts from a full-surface background
    assert!(matches!(
        renderer.commands.get(1),
        Some(DrawCommand::Sprite {
            sprite: Sprite::Background(_),
            ..
        })
    ));
}
