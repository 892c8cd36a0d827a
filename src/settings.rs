//! Game settings and balance
//!
//! Physics constants, playfield geometry and the rule variants that differ
//! between builds of the game. Persisted as JSON next to the save data.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::highscores::MedalBands;
use crate::persistence::StoreError;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Distance from gap center to each pipe
    pub fn gap(&self) -> f32 {
        match self {
            Difficulty::Easy => 115.0,
            Difficulty::Normal => PIPE_GAP,
            Difficulty::Hard => 85.0,
        }
    }

    /// Horizontal pipe and ground speed
    pub fn scroll_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.75,
            Difficulty::Normal => SCROLL_SPEED,
            Difficulty::Hard => 2.5,
        }
    }

    pub fn gravity(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.22,
            Difficulty::Normal => GRAVITY,
            Difficulty::Hard => 0.3,
        }
    }

    pub fn lift(&self) -> f32 {
        match self {
            Difficulty::Easy => -4.2,
            Difficulty::Normal => LIFT,
            Difficulty::Hard => -5.0,
        }
    }
}

/// How a new pipe picks its gap center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum GapPlacement {
    /// Uniform over the whole allowed band
    #[default]
    Uniform,
    /// Within `max_delta` of the previous pipe's gap center
    Correlated { max_delta: f32 },
}

/// Whether a pipe can still score in the tick the bird dies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoringPolicy {
    #[default]
    AllowOnDeathTick,
    AliveOnly,
}

/// When a dead bird ends the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeathTransition {
    #[default]
    Immediate,
    /// Keep Running (frozen world, falling bird) for this many ticks first
    Delayed { ticks: u32 },
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preset the physics values were derived from
    pub difficulty: Difficulty,

    // === Playfield ===
    pub width: f32,
    pub height: f32,
    pub floor_height: f32,

    // === Pipes ===
    pub pipe_width: f32,
    pub pipe_height: f32,
    /// Distance from gap center to each pipe rectangle
    pub gap: f32,
    /// Clearance kept between gap band and ceiling/floor
    pub margin: f32,
    pub spawn_interval: f32,
    pub scroll_speed: f32,
    pub gap_placement: GapPlacement,

    // === Physics ===
    pub gravity: f32,
    pub lift: f32,
    pub pipe_death_velocity: f32,
    pub ground_death_velocity: f32,

    // === Rules ===
    pub scoring: ScoringPolicy,
    pub death_transition: DeathTransition,
    pub medals: MedalBands,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,

            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            floor_height: FLOOR_HEIGHT,

            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            gap: PIPE_GAP,
            margin: PIPE_MARGIN,
            spawn_interval: SPAWN_INTERVAL,
            scroll_speed: SCROLL_SPEED,
            gap_placement: GapPlacement::Uniform,

            gravity: GRAVITY,
            lift: LIFT,
            pipe_death_velocity: PIPE_DEATH_VELOCITY,
            ground_death_velocity: GROUND_DEATH_VELOCITY,

            scoring: ScoringPolicy::AllowOnDeathTick,
            death_transition: DeathTransition::Immediate,
            medals: MedalBands::default(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Create settings from a difficulty preset (applies preset defaults)
    pub fn from_preset(preset: Difficulty) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a difficulty preset (updates physics and pipe spacing)
    pub fn apply_preset(&mut self, preset: Difficulty) {
        self.difficulty = preset;
        self.gap = preset.gap();
        self.scroll_speed = preset.scroll_speed();
        self.gravity = preset.gravity();
        self.lift = preset.lift();
    }

    /// Y coordinate of the ground line
    pub fn floor_y(&self) -> f32 {
        self.height - self.floor_height
    }

    /// Lowest allowed gap center (closest to the ceiling)
    pub fn min_gap_center(&self) -> f32 {
        self.margin
    }

    /// Highest allowed gap center (closest to the ground)
    pub fn max_gap_center(&self) -> f32 {
        (self.height - self.gap - self.floor_height - self.margin).max(self.min_gap_center())
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
