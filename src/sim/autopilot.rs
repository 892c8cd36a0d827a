//! Demo-mode pilot
//!
//! Flaps whenever the bird sinks below a target line inside the next gap.
//! Good enough to keep the attract screen alive, not a perfect player.

use super::state::{GamePhase, GameState};
use crate::settings::Settings;

/// How far below the gap center the bird's bottom edge may sink, as a
/// fraction of the gap half-height
const TARGET_DEPTH: f32 = 0.6;

/// Decide whether the pilot would flap this tick
pub fn wants_flap(state: &GameState, settings: &Settings) -> bool {
    match state.phase {
        GamePhase::NotStarted => true,
        GamePhase::Ended => false,
        GamePhase::Running => {
            let bird = &state.bird;
            if bird.dead || bird.velocity < 0.0 {
                return false;
            }
            let target_bottom = match state.next_pipe(settings) {
                Some(pipe) => pipe.gap_center + settings.gap * TARGET_DEPTH,
                None => settings.height / 2.0,
            };
            bird.bottom() > target_bottom
        }
    }
}
