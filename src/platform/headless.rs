//! Headless collaborators
//!
//! A renderer that records draw calls and audio players that log or record
//! what they were asked to play. Used by the native binary and by tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec2;

use crate::audio::{AudioPlayer, SoundEffect};
use crate::highscores::Medal;
use crate::renderer::{Renderer, Sprite, TextStyle};
use crate::settings::Settings;
use crate::sim::{Background, BirdColor, PipeColor};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: Sprite,
        pos: Vec2,
        size: Option<Vec2>,
    },
    RotatedSprite {
        sprite: Sprite,
        center: Vec2,
        angle: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
    },
    Alpha(f32),
}

/// Renderer that remembers every call of the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    size: Vec2,
    sprite_sizes: HashMap<Sprite, Vec2>,
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Surface with no sprites loaded
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Surface sized to the playfield with every sprite "loaded" at the
    /// dimensions of the stock art
    pub fn with_standard_assets(settings: &Settings) -> Self {
        let mut r = Self::new(Vec2::new(settings.width, settings.height));
        for bg in [Background::Day, Background::Night] {
            r.set_sprite_size(Sprite::Background(bg), Vec2::new(288.0, 512.0));
        }
        r.set_sprite_size(Sprite::Base, Vec2::new(336.0, 112.0));
        for color in [BirdColor::Blue, BirdColor::Red, BirdColor::Yellow] {
            for frame in 0..3 {
                r.set_sprite_size(Sprite::Bird { color, frame }, Vec2::new(34.0, 24.0));
            }
        }
        for color in [PipeColor::Green, PipeColor::Red] {
            r.set_sprite_size(Sprite::PipeDown(color), Vec2::new(52.0, 320.0));
            r.set_sprite_size(Sprite::PipeUp(color), Vec2::new(52.0, 320.0));
        }
        r.set_sprite_size(Sprite::Message, Vec2::new(184.0, 267.0));
        for d in 0..=9 {
            r.set_sprite_size(Sprite::Digit(d), Vec2::new(24.0, 36.0));
        }
        r.set_sprite_size(Sprite::GameOver, Vec2::new(192.0, 42.0));
        r.set_sprite_size(Sprite::ScoreBoard, Vec2::new(640.0, 320.0));
        for medal in [Medal::Bronze, Medal::Silver, Medal::Gold, Medal::Platinum] {
            r.set_sprite_size(Sprite::Medal(medal), Vec2::new(120.0, 120.0));
        }
        r
    }

    /// Mark a sprite as loaded with the given natural size
    pub fn set_sprite_size(&mut self, sprite: Sprite, size: Vec2) {
        self.sprite_sizes.insert(sprite, size);
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn so far
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn surface_size(&self) -> Vec2 {
        self.size
    }

    fn sprite_size(&self, sprite: Sprite) -> Option<Vec2> {
        self.sprite_sizes.get(&sprite).copied()
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, size: Option<Vec2>) {
        self.commands.push(DrawCommand::Sprite { sprite, pos, size });
    }

    fn draw_sprite_rotated(&mut self, sprite: Sprite, center: Vec2, angle: f32) {
        if self.sprite_sizes.contains_key(&sprite) {
            self.commands.push(DrawCommand::RotatedSprite {
                sprite,
                center,
                angle,
            });
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style: style.clone(),
        });
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::Alpha(alpha));
    }
}

/// Audio player that writes each effect to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioPlayer for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("♪ {} at {:.2}", effect.asset_path(), volume);
    }
}

/// Audio player that keeps a shared list of played effects
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Rc<RefCell<Vec<SoundEffect>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects played so far, in order
    pub fn played(&self) -> Vec<SoundEffect> {
        self.played.borrow().clone()
    }
}

impl AudioPlayer for RecordingAudio {
    fn play(&mut self, effect: SoundEffect, _volume: f32) {
        self.played.borrow_mut().push(effect);
    }
}
