//! Flappy entry point
//!
//! Headless demo: the autopilot plays a number of rounds against a recording
//! renderer, sounds go to the log and the best score is kept in a JSON file.
//!
//! Run `flappy --help` for the flags.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use flappy::audio::AudioManager;
#[cfg(not(target_arch = "wasm32"))]
use flappy::persistence::{JsonFileStore, MemoryStore, PersistentStore};
#[cfg(not(target_arch = "wasm32"))]
use flappy::platform::{
    FixedRate, FrameBudget, FrameScheduler, LogAudio, RecordingRenderer, ScriptedInput,
};
#[cfg(not(target_arch = "wasm32"))]
use flappy::sim::GamePhase;
#[cfg(not(target_arch = "wasm32"))]
use flappy::{Difficulty, Game, Settings};

/// Hard stop so a perfect autopilot cannot run forever
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES_PER_ROUND: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "flappy")]
#[command(about = "Headless flappy bird: the autopilot plays a number of rounds")]
struct Args {
    /// Seed for pipe placement and themes
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,
    /// Rounds to play before exiting
    #[arg(long, default_value_t = 3)]
    rounds: u32,
    /// Difficulty preset (easy, normal, hard), applied over the settings file
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
    /// Settings JSON to load
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Write the effective settings to this path before playing
    #[arg(long)]
    save_settings: Option<PathBuf>,
    /// JSON file holding the best score
    #[arg(long, default_value = "flappy-scores.json")]
    store: PathBuf,
    /// Pace frames at 60 fps instead of running flat out
    #[arg(long)]
    realtime: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty: {s}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Flappy (native, headless) starting...");

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if let Some(preset) = args.difficulty {
        settings.apply_preset(preset);
    }
    if let Some(path) = &args.save_settings {
        if let Err(e) = settings.save(path) {
            log::warn!("Could not save settings to {}: {}", path.display(), e);
        }
    }

    let store: Box<dyn PersistentStore> = match JsonFileStore::open(&args.store) {
        Ok(store) => {
            log::info!("Best score kept in {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!(
                "Could not open {}: {}; best score will not be saved",
                args.store.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    };

    let mut renderer = RecordingRenderer::with_standard_assets(&settings);
    let audio = AudioManager::new(Box::new(LogAudio));
    let mut game = Game::new(args.seed, settings, store, audio);
    game.set_autopilot(true);

    let budget = MAX_FRAMES_PER_ROUND * u64::from(args.rounds.max(1));
    let mut scheduler: Box<dyn FrameScheduler> = if args.realtime {
        Box::new(FixedRate::default().with_limit(budget))
    } else {
        Box::new(FrameBudget::new(budget))
    };
    let mut input = ScriptedInput::new();

    while scheduler.next_frame() {
        if game.phase() == GamePhase::Ended && game.state.overlay_alpha >= 1.0 {
            if game.rounds_played() >= args.rounds {
                break;
            }
            // Dismiss the scoreboard
            game.flap();
        }
        renderer.clear();
        game.frame(&mut input, &mut renderer);
    }

    log::info!(
        "Played {} rounds in {} frames: last score {:?}, session best {}, best {}",
        game.rounds_played(),
        game.frames(),
        game.last_score(),
        game.session_best(),
        game.high_scores.best
    );
    log::debug!("Last frame issued {} draw calls", renderer.commands.len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts embed the library directly
}
