//! Pipe generation, scrolling and recycling

use rand::Rng;

use super::state::Pipe;
use crate::settings::{GapPlacement, Settings};

/// True when a new pipe should enter at the right edge
pub fn should_spawn(pipes: &[Pipe], settings: &Settings) -> bool {
    match pipes.last() {
        None => true,
        Some(last) => settings.width - last.x >= settings.spawn_interval,
    }
}

/// Gap center for the next pipe, always inside the allowed band
pub fn next_gap_center(previous: Option<f32>, settings: &Settings, rng: &mut impl Rng) -> f32 {
    let min = settings.min_gap_center();
    let max = settings.max_gap_center();

    match (settings.gap_placement, previous) {
        (GapPlacement::Correlated { max_delta }, Some(prev)) if max_delta > 0.0 => {
            // Anything wider than the band clamps to the same result
            let max_delta = max_delta.min(max - min);
            if max_delta <= 0.0 {
                return prev.clamp(min, max);
            }
            let delta = rng.random_range(-1.0f32..=1.0) * max_delta;
            (prev + delta).clamp(min, max)
        }
        (GapPlacement::Correlated { .. }, Some(prev)) => prev.clamp(min, max),
        _ => uniform_gap_center(min, max, rng),
    }
}

/// Whole-pixel uniform pick from `[min, max]`
fn uniform_gap_center(min: f32, max: f32, rng: &mut impl Rng) -> f32 {
    let lo = min.ceil() as i32;
    let hi = max.floor() as i32;
    if hi < lo {
        return min;
    }
    rng.random_range(lo..=hi) as f32
}

/// Push a new pipe at the right edge of the playfield
pub fn spawn_pipe(pipes: &mut Vec<Pipe>, settings: &Settings, rng: &mut impl Rng) {
    let previous = pipes.last().map(|p| p.gap_center);
    let gap_center = next_gap_center(previous, settings, rng);
    log::debug!("Spawning pipe with gap center {}", gap_center);
    pipes.push(Pipe::new(settings.width, gap_center));
}

/// Scroll every pipe left by one tick
pub fn advance_pipes(pipes: &mut [Pipe], speed: f32) {
    for pipe in pipes.iter_mut() {
        pipe.x -= speed;
    }
}

/// Drop pipes whose trailing edge has left the playfield, keeping order
pub fn recycle_pipes(pipes: &mut Vec<Pipe>, settings: &Settings) {
    pipes.retain(|p| p.right(settings) >= 0.0);
}
