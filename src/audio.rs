//! Audio routing
//!
//! The game never decodes or mixes audio itself. It maps simulation events
//! to named sound effects and hands them to a host `AudioPlayer`.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Bird flaps
    Wing,
    /// Pipe passed
    Point,
    /// Bird hit something
    Hit,
    /// Follows `Hit` after a short pause
    Die,
    /// New round set up
    Swoosh,
}

impl SoundEffect {
    /// Asset the host should load for this effect
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::Wing => "assets/audio/wing.wav",
            SoundEffect::Point => "assets/audio/point.wav",
            SoundEffect::Hit => "assets/audio/hit.wav",
            SoundEffect::Die => "assets/audio/die.wav",
            SoundEffect::Swoosh => "assets/audio/swoosh.wav",
        }
    }

    /// Sound that accompanies a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Flap => Some(SoundEffect::Wing),
            GameEvent::Scored { .. } => Some(SoundEffect::Point),
            GameEvent::Hit { .. } => Some(SoundEffect::Hit),
            GameEvent::Die => Some(SoundEffect::Die),
            GameEvent::Reset { .. } => Some(SoundEffect::Swoosh),
            GameEvent::RoundStarted { .. } | GameEvent::RoundEnded { .. } => None,
        }
    }
}

/// Host audio output. Fire-and-forget: playing an effect that is already
/// playing restarts it. Missing or broken assets are the player's problem
/// and must not panic.
pub trait AudioPlayer {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    player: Option<Box<dyn AudioPlayer>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    pub fn new(player: Box<dyn AudioPlayer>) -> Self {
        Self {
            player: Some(player),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with no output; every `play` is a no-op
    pub fn disabled() -> Self {
        Self {
            player: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.play(effect, vol);
    }

    /// Play whatever sounds a batch of events calls for, in order
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
