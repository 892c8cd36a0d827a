//! Frame pacing
//!
//! The simulation counts frames, never seconds, so a scheduler only decides
//! when the next frame happens and when to stop.

use std::time::{Duration, Instant};

use crate::consts::FRAMES_PER_SECOND;

/// Invokes the game once per frame
pub trait FrameScheduler {
    /// Block until the next frame is due. Returns false to stop the loop.
    fn next_frame(&mut self) -> bool;
}

/// Runs a fixed number of frames as fast as possible
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Sleeps to hold a steady frame rate, optionally for a limited number of frames
#[derive(Debug, Clone)]
pub struct FixedRate {
    period: Duration,
    next: Option<Instant>,
    remaining: Option<u64>,
}

impl Default for FixedRate {
    fn default() -> Self {
        Self::new(FRAMES_PER_SECOND)
    }
}

impl FixedRate {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next: None,
            remaining: None,
        }
    }

    pub fn with_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }
}

impl FrameScheduler for FixedRate {
    fn next_frame(&mut self) -> bool {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        let due = self.next.unwrap_or(now);
        if due > now {
            std::thread::sleep(due - now);
        }
        // Fell behind: restart the cadence instead of bursting to catch up
        let base = if due + self.period < now { now } else { due };
        self.next = Some(base + self.period);
        true
    }
}
