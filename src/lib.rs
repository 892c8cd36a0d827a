//! Flappy - A side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, pipes, collisions, scoring, phases)
//! - `renderer`: Draw-call adapter over a host-provided surface
//! - `audio`: Sound effect routing over a host-provided player
//! - `platform`: Input, frame pacing and headless collaborators
//! - `persistence`: Named integer storage (best score)
//! - `settings`: Data-driven game balance and rule variants
//! - `game`: Frame driver tying the above together

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::{HighScores, Medal, MedalBands, medal_for};
pub use settings::{DeathTransition, Difficulty, GapPlacement, ScoringPolicy, Settings};

/// Game configuration constants (defaults for `Settings`)
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Height of the scrolling ground strip at the bottom
    pub const FLOOR_HEIGHT: f32 = 112.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 320.0;
    /// Distance from the gap center to each pipe rectangle
    pub const PIPE_GAP: f32 = 100.0;
    /// Keeps gap centers away from the ceiling and the ground
    pub const PIPE_MARGIN: f32 = 50.0;
    /// Horizontal distance between pipe spawns
    pub const SPAWN_INTERVAL: f32 = 150.0;
    /// Pipes and ground move this many pixels per tick
    pub const SCROLL_SPEED: f32 = 2.0;

    /// Bird geometry
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;

    /// Vertical physics (pixels per tick)
    pub const GRAVITY: f32 = 0.25;
    pub const LIFT: f32 = -4.5;
    pub const PIPE_DEATH_VELOCITY: f32 = 5.0;
    pub const GROUND_DEATH_VELOCITY: f32 = 0.0;

    /// Tilt limits (radians)
    pub const MAX_UP_TILT: f32 = -25.0 * std::f32::consts::PI / 180.0;
    pub const MAX_DOWN_TILT: f32 = 45.0 * std::f32::consts::PI / 180.0;
    /// Per-tick tilt increase while dead
    pub const DEAD_TILT_STEP: f32 = 0.15;

    /// Idle bob while waiting for the first flap
    pub const IDLE_BOB_AMPLITUDE: f32 = 5.0;
    pub const IDLE_BOB_PERIOD: f32 = 10.0;

    /// Wing animation
    pub const WING_FRAMES: u32 = 3;
    pub const TICKS_PER_WING_FRAME: u32 = 5;

    /// Delay between the hit and die sounds (about 200 ms at 60 Hz)
    pub const DIE_SOUND_DELAY_TICKS: u32 = 12;

    /// Scoreboard fade-in per frame
    pub const OVERLAY_FADE_STEP: f32 = 0.05;

    /// Display refresh the frame counters assume
    pub const FRAMES_PER_SECOND: u32 = 60;
}

/// Key under which the best score is persisted
pub const BEST_SCORE_KEY: &str = "bestScore";
