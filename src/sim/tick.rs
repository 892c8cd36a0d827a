//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one display frame.
//! Input is applied before anything moves, so a flap always lands between
//! two ticks. Within a tick the order is:
//!
//! 1. countdowns (die sound, delayed ending)
//! 2. bird motion
//! 3. pipe spawn and scroll
//! 4. collisions against the positions produced in step 3
//! 5. scoring
//! 6. pipe recycling, round ending

use super::autopilot;
use super::collision::{bird_ground_collision, first_pipe_hit};
use super::motion;
use super::spawn;
use super::state::{Bird, DeathCause, GameEvent, GamePhase, GameState, Theme};
use crate::consts::*;
use crate::settings::{DeathTransition, ScoringPolicy, Settings};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (space/click/tap)
    pub flap: bool,
    /// Demo mode - the autopilot decides when to flap
    pub autopilot: bool,
}

/// Handle one flap press according to the current phase
pub fn flap(state: &mut GameState, settings: &Settings) {
    match state.phase {
        GamePhase::NotStarted => {
            state.phase = GamePhase::Running;
            state.events.push(GameEvent::RoundStarted { round: state.round });
            log::info!("Round {} started", state.round);
        }
        GamePhase::Running => {
            if !state.bird.dead {
                motion::apply_lift(&mut state.bird, settings.lift);
                state.events.push(GameEvent::Flap);
            }
        }
        GamePhase::Ended => reset(state, settings),
    }
}

/// Reinitialize for a new round. Pending countdowns belong to the old round
/// and are dropped here.
pub fn reset(state: &mut GameState, settings: &Settings) {
    state.round += 1;
    state.phase = GamePhase::NotStarted;
    state.score = 0;
    state.time_ticks = 0;
    state.anim_ticks = 0;
    state.bird = Bird::spawn(settings.height);
    state.pipes.clear();
    state.theme = Theme::random(&mut state.rng);
    state.ground_offset = 0.0;
    state.overlay_alpha = 0.0;
    state.end_delay_ticks = None;
    state.die_sound_ticks = None;
    state.events.push(GameEvent::Reset { round: state.round });
    log::debug!("Reset to round {} with theme {:?}", state.round, state.theme);
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) {
    if input.flap || (input.autopilot && autopilot::wants_flap(state, settings)) {
        flap(state, settings);
    }

    state.anim_ticks += 1;
    motion::update_wing_frame(&mut state.bird, state.anim_ticks);

    // Ground keeps scrolling until the bird dies
    if !(state.is_started() && state.bird.dead) {
        state.ground_offset -= settings.scroll_speed;
        if state.ground_offset <= -settings.width {
            state.ground_offset = 0.0;
        }
    }

    match state.phase {
        GamePhase::NotStarted => {
            motion::idle_bob(&mut state.bird, state.anim_ticks, settings.height);
        }
        GamePhase::Running | GamePhase::Ended => step_round(state, settings),
    }
}

fn step_round(state: &mut GameState, settings: &Settings) {
    state.time_ticks += 1;
    advance_countdowns(state);

    let running = state.phase == GamePhase::Running;
    let was_dead = state.bird.dead;

    motion::integrate(&mut state.bird, settings.gravity);
    motion::update_tilt(&mut state.bird);

    if running && !was_dead {
        if spawn::should_spawn(&state.pipes, settings) {
            spawn::spawn_pipe(&mut state.pipes, settings, &mut state.rng);
        }
        spawn::advance_pipes(&mut state.pipes, settings.scroll_speed);
    }

    if !was_dead && first_pipe_hit(&state.bird, &state.pipes, settings).is_some() {
        kill(state, DeathCause::Pipe, settings);
    }

    let floor_y = settings.floor_y();
    if bird_ground_collision(&state.bird.rect(), floor_y) {
        motion::clamp_to_floor(&mut state.bird, floor_y);
        if state.bird.dead {
            state.bird.velocity = 0.0;
        } else {
            kill(state, DeathCause::Ground, settings);
        }
    }

    let may_score = running
        && !was_dead
        && match settings.scoring {
            ScoringPolicy::AllowOnDeathTick => true,
            ScoringPolicy::AliveOnly => !state.bird.dead,
        };
    if may_score {
        score_passed_pipes(state, settings);
    }

    spawn::recycle_pipes(&mut state.pipes, settings);

    if state.phase == GamePhase::Running && state.end_delay_ticks == Some(0) {
        end_round(state);
    }

    if state.phase == GamePhase::Ended {
        state.overlay_alpha = (state.overlay_alpha + OVERLAY_FADE_STEP).min(1.0);
    }
}

/// Tick down the per-round timers that stand in for deferred callbacks
fn advance_countdowns(state: &mut GameState) {
    if let Some(ticks) = state.die_sound_ticks {
        if ticks <= 1 {
            state.die_sound_ticks = None;
            state.events.push(GameEvent::Die);
        } else {
            state.die_sound_ticks = Some(ticks - 1);
        }
    }

    if let Some(ticks) = state.end_delay_ticks {
        state.end_delay_ticks = Some(ticks.saturating_sub(1));
    }
}

/// Mark the bird dead and schedule the end of the round
fn kill(state: &mut GameState, cause: DeathCause, settings: &Settings) {
    state.bird.dead = true;
    state.bird.velocity = match cause {
        DeathCause::Pipe => settings.pipe_death_velocity,
        DeathCause::Ground => settings.ground_death_velocity,
    };
    state.events.push(GameEvent::Hit { cause });
    state.die_sound_ticks = Some(DIE_SOUND_DELAY_TICKS);
    state.end_delay_ticks = Some(match settings.death_transition {
        DeathTransition::Immediate => 0,
        DeathTransition::Delayed { ticks } => ticks,
    });
    log::info!(
        "Bird hit {:?} after {} ticks with score {}",
        cause,
        state.time_ticks,
        state.score
    );
}

fn score_passed_pipes(state: &mut GameState, settings: &Settings) {
    let bird_left = state.bird.pos.x;
    for pipe in state.pipes.iter_mut() {
        if !pipe.scored && pipe.right(settings) < bird_left {
            pipe.scored = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
        }
    }
}

fn end_round(state: &mut GameState) {
    state.phase = GamePhase::Ended;
    state.end_delay_ticks = None;
    state.best_score = state.best_score.max(state.score);
    state.events.push(GameEvent::RoundEnded {
        score: state.score,
        best: state.best_score,
    });
    log::info!(
        "Round {} over: score {}, best {}",
        state.round,
        state.score,
        state.best_score
    );
}
