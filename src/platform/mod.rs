//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (keyboard/pointer to flaps)
//! - Frame pacing
//! - Headless stand-ins for the renderer and audio output

pub mod headless;
pub mod input;
pub mod scheduler;

pub use headless::{DrawCommand, LogAudio, RecordingAudio, RecordingRenderer};
pub use input::{InputEvent, InputSource, Key, ScriptedInput};
pub use scheduler::{FixedRate, FrameBudget, FrameScheduler};
