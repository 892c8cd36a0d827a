//! Input events
//!
//! Hosts translate their native events into `InputEvent`s. Every press is
//! one event; key repeat is the host's business.

use std::collections::BTreeMap;

use glam::Vec2;

/// Keys a host reports; anything else is dropped before it gets here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    PointerDown { pos: Vec2 },
}

impl InputEvent {
    /// Space or any click/tap flaps
    pub fn is_flap(&self) -> bool {
        matches!(
            self,
            InputEvent::KeyDown(Key::Space) | InputEvent::PointerDown { .. }
        )
    }
}

/// Source of discrete input events, polled once per frame
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Replays events at fixed frame numbers (frame 0 is the first poll)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: BTreeMap<u64, Vec<InputEvent>>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` for delivery on `frame`
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.script.entry(frame).or_default().push(event);
        self
    }

    /// Queue a space press on each of `frames`
    pub fn flaps(frames: impl IntoIterator<Item = u64>) -> Self {
        frames
            .into_iter()
            .fold(Self::new(), |s, f| s.at(f, InputEvent::KeyDown(Key::Space)))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let events = self.script.remove(&self.frame).unwrap_or_default();
        self.frame += 1;
        events
    }
}
