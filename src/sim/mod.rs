//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per displayed frame, counters instead of wall-clock timers
//! - Seeded RNG only
//! - Pipes kept in creation order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{PipeHit, Rect, bird_ground_collision, bird_pipe_collision};
pub use state::{
    Background, Bird, BirdColor, DeathCause, GameEvent, GamePhase, GameState, Pipe, PipeColor,
    Theme,
};
pub use tick::{TickInput, flap, reset, tick};
