//! Rendering module
//!
//! The crate does not rasterize anything. A host implements `Renderer` over
//! whatever surface it has (canvas, window, terminal) and `scene::draw`
//! issues the draw calls for one frame.

pub mod scene;

use glam::Vec2;

use crate::highscores::Medal;
use crate::sim::{Background, BirdColor, PipeColor};

pub use scene::draw;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background(Background),
    /// Ground strip
    Base,
    /// Bird with wing frame 0 (up), 1 (mid) or 2 (down)
    Bird { color: BirdColor, frame: u32 },
    /// Upper pipe, opening facing down
    PipeDown(PipeColor),
    /// Lower pipe, opening facing up
    PipeUp(PipeColor),
    /// "Get Ready" splash
    Message,
    Digit(u8),
    GameOver,
    ScoreBoard,
    Medal(Medal),
}

impl Sprite {
    /// Asset the host should load for this sprite
    pub fn asset_path(&self) -> String {
        match self {
            Sprite::Background(Background::Day) => "assets/sprites/background-day.png".into(),
            Sprite::Background(Background::Night) => {
                "assets/sprites/background-night.png".into()
            }
            Sprite::Base => "assets/sprites/base.png".into(),
            Sprite::Bird { color, frame } => {
                let color = match color {
                    BirdColor::Blue => "blue",
                    BirdColor::Red => "red",
                    BirdColor::Yellow => "yellow",
                };
                let wing = match frame {
                    0 => "upflap",
                    1 => "midflap",
                    _ => "downflap",
                };
                format!("assets/sprites/{color}bird-{wing}.png")
            }
            Sprite::PipeDown(color) => format!("assets/sprites/pipe-{}-down.png", pipe_name(*color)),
            Sprite::PipeUp(color) => format!("assets/sprites/pipe-{}-up.png", pipe_name(*color)),
            Sprite::Message => "assets/sprites/Message.png".into(),
            Sprite::Digit(d) => format!("assets/sprites/{}.png", (*d).min(9)),
            Sprite::GameOver => "assets/sprites/gameover.png".into(),
            Sprite::ScoreBoard => "assets/sprites/score_board.png".into(),
            Sprite::Medal(medal) => format!(
                "assets/sprites/medal_{}.png",
                medal.as_str().to_lowercase()
            ),
        }
    }
}

fn pipe_name(color: PipeColor) -> &'static str {
    match color {
        PipeColor::Green => "green",
        PipeColor::Red => "red",
    }
}

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    /// RGBA
    pub color: [f32; 4],
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_px: 20.0,
            color: [1.0, 1.0, 1.0, 1.0],
            align: TextAlign::Left,
        }
    }
}

/// A fixed-size drawing surface provided by the host
pub trait Renderer {
    /// Surface width and height in pixels
    fn surface_size(&self) -> Vec2;

    /// Natural size of a sprite, or `None` if it is not loaded yet
    fn sprite_size(&self, sprite: Sprite) -> Option<Vec2>;

    /// Draw with the top-left corner at `pos`; `size` stretches the image
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, size: Option<Vec2>);

    /// Draw at natural size, rotated by `angle` radians around `center`.
    /// Surfaces without rotation fall back to an upright draw.
    fn draw_sprite_rotated(&mut self, sprite: Sprite, center: Vec2, angle: f32) {
        let _ = angle;
        if let Some(size) = self.sprite_size(sprite) {
            self.draw_sprite(sprite, center - size / 2.0, None);
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);

    /// Opacity applied to subsequent draws (0-1)
    fn set_global_alpha(&mut self, alpha: f32);
}
