//! Collision detection
//!
//! Everything is axis-aligned. All comparisons are strict so that boxes
//! which only touch along an edge do not collide; the ground is the one
//! exception and counts contact as a hit.

use glam::Vec2;

use super::state::{Bird, Pipe};
use crate::settings::Settings;

/// Axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Open-interval overlap on the x axis
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }

    /// Strict intersection; shared edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps_horizontally(other)
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

/// Which half of a pipe pair was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeHit {
    Top,
    Bottom,
}

/// Check the bird against one pipe pair
///
/// The top pipe is treated as extending up forever and the bottom pipe down
/// forever, so flying over the top of the screen is not a way around it.
pub fn bird_pipe_collision(bird: &Rect, pipe: &Pipe, settings: &Settings) -> Option<PipeHit> {
    let top = pipe.top_rect(settings);
    if !bird.overlaps_horizontally(&top) {
        return None;
    }
    if bird.top() < top.bottom() {
        return Some(PipeHit::Top);
    }
    let bottom = pipe.bottom_rect(settings);
    if bird.bottom() > bottom.top() {
        return Some(PipeHit::Bottom);
    }
    None
}

/// True when the bird is touching or below the ground line
#[inline]
pub fn bird_ground_collision(bird: &Rect, floor_y: f32) -> bool {
    bird.bottom() >= floor_y
}

/// First pipe the bird overlaps, if any
pub fn first_pipe_hit(bird: &Bird, pipes: &[Pipe], settings: &Settings) -> Option<PipeHit> {
    let rect = bird.rect();
    pipes
        .iter()
        .find_map(|pipe| bird_pipe_collision(&rect, pipe, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bird_at(x: f32, y: f32) -> Rect {
        Rect::from_xywh(x, y, 34.0, 24.0)
    }

    #[test]
    fn test_bird_inside_gap_does_not_collide() {
        let settings = Settings::default();
        let pipe = Pipe::new(400.0, 200.0);
        let bird = bird_at(50.0, 140.0);

        // Slide the pipe across the whole bird
        let mut x = 400.0;
        while x > -60.0 {
            let pipe = Pipe { x, ..pipe };
            assert_eq!(bird_pipe_collision(&bird, &pipe, &settings), None, "x = {x}");
            x -= 2.0;
        }
    }

    #[test]
    fn test_top_and_bottom_hits() {
        let settings = Settings::default();
        let pipe = Pipe::new(60.0, 200.0);

        // Gap spans 100..300
        assert_eq!(
            bird_pipe_collision(&bird_at(50.0, 99.0), &pipe, &settings),
            Some(PipeHit::Top)
        );
        assert_eq!(
            bird_pipe_collision(&bird_at(50.0, 277.0), &pipe, &settings),
            Some(PipeHit::Bottom)
        );
    }

    #[test]
    fn test_edges_touching_are_not_hits() {
        let settings = Settings::default();

        // Bird top exactly at top pipe bottom
        let pipe = Pipe::new(60.0, 200.0);
        assert_eq!(bird_pipe_collision(&bird_at(50.0, 100.0), &pipe, &settings), None);
        // Bird bottom exactly at bottom pipe top (276 + 24 = 300)
        assert_eq!(bird_pipe_collision(&bird_at(50.0, 276.0), &pipe, &settings), None);

        // Bird right edge exactly at pipe left edge, well inside the top pipe vertically
        let pipe = Pipe::new(84.0, 200.0);
        assert_eq!(bird_pipe_collision(&bird_at(50.0, 0.0), &pipe, &settings), None);
        // Bird left edge exactly at pipe right edge
        let pipe = Pipe::new(-2.0, 200.0);
        assert_eq!(bird_pipe_collision(&bird_at(50.0, 0.0), &pipe, &settings), None);
        // One unit further in and it hits
        let pipe = Pipe::new(83.0, 200.0);
        assert_eq!(
            bird_pipe_collision(&bird_at(50.0, 0.0), &pipe, &settings),
            Some(PipeHit::Top)
        );
    }

    #[test]
    fn test_above_screen_still_hits_top_pipe() {
        let settings = Settings::default();
        let pipe = Pipe::new(60.0, 200.0);
        assert_eq!(
            bird_pipe_collision(&bird_at(50.0, -500.0), &pipe, &settings),
            Some(PipeHit::Top)
        );
    }

    #[test]
    fn test_ground_contact_counts() {
        assert!(bird_ground_collision(&bird_at(50.0, 464.0), 488.0));
        assert!(bird_ground_collision(&bird_at(50.0, 470.0), 488.0));
        assert!(!bird_ground_collision(&bird_at(50.0, 463.5), 488.0));
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0, aw in 0.0f32..80.0, ah in 0.0f32..80.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0, bw in 0.0f32..80.0, bh in 0.0f32..80.0,
        ) {
            let a = Rect::from_xywh(ax, ay, aw, ah);
            let b = Rect::from_xywh(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn adjacent_rects_never_intersect(x in -100i32..100, y in -100i32..100, w in 1i32..80, h in 1i32..80) {
            let (x, y, w, h) = (x as f32, y as f32, w as f32, h as f32);
            let a = Rect::from_xywh(x, y, w, h);
            let right = Rect::from_xywh(x + w, y, w, h);
            let below = Rect::from_xywh(x, y + h, w, h);
            prop_assert!(!a.intersects(&right));
            prop_assert!(!a.intersects(&below));
        }
    }
}
