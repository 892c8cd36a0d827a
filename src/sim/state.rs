//! Game state and core simulation types
//!
//! `GameState` owns everything a round needs: the bird, the live pipes,
//! the cosmetic theme, pending countdowns and the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird bobbing in place, waiting for the first flap
    NotStarted,
    /// Active gameplay (also covers a dead bird during a delayed ending)
    Running,
    /// Round over, scoreboard visible
    Ended,
}

/// What killed the bird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Pipe,
    Ground,
}

/// Things that happened during a tick, for audio and bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First flap of a round
    RoundStarted { round: u32 },
    /// Lift applied
    Flap,
    /// A pipe was passed
    Scored { score: u32 },
    /// Bird died
    Hit { cause: DeathCause },
    /// Delayed follow-up to `Hit`
    Die,
    /// Round reached `Ended`
    RoundEnded { score: u32, best: u32 },
    /// State was reinitialized for a new round
    Reset { round: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirdColor {
    Blue,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Background {
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeColor {
    Green,
    Red,
}

/// Per-round cosmetic choices; no effect on rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub bird: BirdColor,
    pub background: Background,
    pub pipe: PipeColor,
}

impl Theme {
    pub fn random(rng: &mut impl Rng) -> Self {
        const BIRDS: [BirdColor; 3] = [BirdColor::Blue, BirdColor::Red, BirdColor::Yellow];
        const BACKGROUNDS: [Background; 2] = [Background::Day, Background::Night];
        const PIPES: [PipeColor; 2] = [PipeColor::Green, PipeColor::Red];
        Self {
            bird: BIRDS[rng.random_range(0..BIRDS.len())],
            background: BACKGROUNDS[rng.random_range(0..BACKGROUNDS.len())],
            pipe: PIPES[rng.random_range(0..PIPES.len())],
        }
    }
}

/// The player sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner; `pos.x` never changes after spawn
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = down)
    pub velocity: f32,
    pub dead: bool,
    /// Rotation in radians (positive = nose down), cosmetic
    pub tilt: f32,
    /// Wing frame index (0 = up, 1 = mid, 2 = down), cosmetic
    pub frame: u32,
}

impl Bird {
    /// A fresh bird at the start position for a playfield of `height`
    pub fn spawn(height: f32) -> Self {
        Self {
            pos: Vec2::new(BIRD_X, height / 2.0),
            size: Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
            velocity: 0.0,
            dead: false,
            tilt: 0.0,
            frame: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// A gated obstacle: a top and a bottom pipe around a gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Vertical middle of the passable gap
    pub gap_center: f32,
    /// Set once the bird has passed this pipe
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_center: f32) -> Self {
        Self {
            x,
            gap_center,
            scored: false,
        }
    }

    /// Trailing edge
    pub fn right(&self, settings: &Settings) -> f32 {
        self.x + settings.pipe_width
    }

    /// Upper pipe rectangle (hangs down to `gap_center - gap`)
    pub fn top_rect(&self, settings: &Settings) -> Rect {
        Rect::from_xywh(
            self.x,
            self.gap_center - settings.gap - settings.pipe_height,
            settings.pipe_width,
            settings.pipe_height,
        )
    }

    /// Lower pipe rectangle (starts at `gap_center + gap`)
    pub fn bottom_rect(&self, settings: &Settings) -> Rect {
        Rect::from_xywh(
            self.x,
            self.gap_center + settings.gap,
            settings.pipe_width,
            settings.pipe_height,
        )
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Round number, bumped on every reset
    pub round: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Pipes passed this round
    pub score: u32,
    /// Best score known when the round began (updated when it ends)
    pub best_score: u32,
    /// Ticks since the round started running
    pub time_ticks: u64,
    /// Ticks since reset, drives wing flapping and the idle bob
    pub anim_ticks: u64,
    pub bird: Bird,
    /// Live pipes, oldest first
    pub pipes: Vec<Pipe>,
    pub theme: Theme,
    /// Ground strip scroll offset in `(-width, 0]`
    pub ground_offset: f32,
    /// Scoreboard fade-in (0-1)
    pub overlay_alpha: f32,
    /// Ticks until a dead bird ends the round (delayed endings only)
    pub end_delay_ticks: Option<u32>,
    /// Ticks until the die sound follows the hit sound
    pub die_sound_ticks: Option<u32>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let theme = Theme::random(&mut rng);
        Self {
            seed,
            round: 1,
            phase: GamePhase::NotStarted,
            score: 0,
            best_score: 0,
            time_ticks: 0,
            anim_ticks: 0,
            bird: Bird::spawn(settings.height),
            pipes: Vec::new(),
            theme,
            ground_offset: 0.0,
            overlay_alpha: 0.0,
            end_delay_ticks: None,
            die_sound_ticks: None,
            events: Vec::new(),
            rng,
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    /// First pipe the bird has not yet fully passed
    pub fn next_pipe(&self, settings: &Settings) -> Option<&Pipe> {
        self.pipes
            .iter()
            .find(|p| p.right(settings) >= self.bird.pos.x)
    }
}
