//! Vertical motion of the bird
//!
//! Explicit Euler per tick: velocity first, then position. Tilt, wing frame
//! and the idle bob are cosmetic and never read by the rules.

use super::state::Bird;
use crate::consts::*;

/// Advance velocity and position by one tick of gravity
#[inline]
pub fn integrate(bird: &mut Bird, gravity: f32) {
    bird.velocity += gravity;
    bird.pos.y += bird.velocity;
}

/// Replace the current velocity with the lift impulse
#[inline]
pub fn apply_lift(bird: &mut Bird, lift: f32) {
    bird.velocity = lift;
}

/// Gentle hover while waiting for the first flap
pub fn idle_bob(bird: &mut Bird, anim_ticks: u64, height: f32) {
    let phase = anim_ticks as f32 / IDLE_BOB_PERIOD;
    bird.pos.y = height / 2.0 + phase.sin() * IDLE_BOB_AMPLITUDE;
    bird.tilt = 0.0;
}

/// Ease tilt toward the pitch implied by the current velocity
pub fn update_tilt(bird: &mut Bird) {
    if bird.dead {
        bird.tilt = (bird.tilt + DEAD_TILT_STEP).min(MAX_DOWN_TILT);
        return;
    }
    let target = if bird.velocity < 0.0 {
        MAX_UP_TILT
    } else {
        (bird.velocity / 10.0).min(MAX_DOWN_TILT)
    };
    bird.tilt += (target - bird.tilt) * 0.1;
}

/// Pick the wing frame for the current animation tick
pub fn update_wing_frame(bird: &mut Bird, anim_ticks: u64) {
    bird.frame = ((anim_ticks / u64::from(TICKS_PER_WING_FRAME)) % u64::from(WING_FRAMES)) as u32;
}

/// Rest the bird on the ground line if it has reached it.
/// Returns true when the bird is on the ground.
pub fn clamp_to_floor(bird: &mut Bird, floor_y: f32) -> bool {
    if bird.bottom() >= floor_y {
        bird.pos.y = floor_y - bird.size.y;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euler_integration() {
        let mut bird = Bird::spawn(600.0);
        bird.pos.y = 150.0;
        bird.velocity = 0.0;
        for _ in 0..4 {
            integrate(&mut bird, 0.25);
        }
        assert_eq!(bird.velocity, 1.0);
        assert_eq!(bird.pos.y, 152.5);
    }

    #[test]
    fn test_gravity_adds_exactly() {
        let mut bird = Bird::spawn(600.0);
        bird.velocity = -4.5;
        let mut prev = bird.velocity;
        for _ in 0..30 {
            integrate(&mut bird, 0.25);
            assert_eq!(bird.velocity, prev + 0.25);
            prev = bird.velocity;
        }
    }

    #[test]
    fn test_lift_overrides_velocity() {
        let mut bird = Bird::spawn(600.0);
        bird.velocity = 7.75;
        apply_lift(&mut bird, -4.5);
        assert_eq!(bird.velocity, -4.5);
        apply_lift(&mut bird, -4.5);
        assert_eq!(bird.velocity, -4.5);
    }

    #[test]
    fn test_idle_bob_stays_near_center() {
        let mut bird = Bird::spawn(600.0);
        bird.velocity = 3.0;
        for t in 0..200 {
            idle_bob(&mut bird, t, 600.0);
            assert!((bird.pos.y - 300.0).abs() <= IDLE_BOB_AMPLITUDE);
        }
        assert_eq!(bird.velocity, 3.0);
        assert_eq!(bird.tilt, 0.0);
    }

    #[test]
    fn test_tilt_eases_up_when_rising() {
        let mut bird = Bird::spawn(600.0);
        bird.velocity = -4.5;
        update_tilt(&mut bird);
        assert!(bird.tilt < 0.0);
        assert!(bird.tilt > MAX_UP_TILT);
    }

    #[test]
    fn test_tilt_capped_when_falling_fast() {
        let mut bird = Bird::spawn(600.0);
        bird.velocity = 100.0;
        for _ in 0..500 {
            update_tilt(&mut bird);
        }
        assert!(bird.tilt <= MAX_DOWN_TILT);
        assert!((bird.tilt - MAX_DOWN_TILT).abs() < 1e-3);
    }

    #[test]
    fn test_dead_tilt_is_monotone() {
        let mut bird = Bird::spawn(600.0);
        bird.dead = true;
        bird.tilt = MAX_UP_TILT;
        bird.velocity = -10.0;
        let mut prev = bird.tilt;
        for _ in 0..50 {
            update_tilt(&mut bird);
            assert!(bird.tilt >= prev);
            assert!(bird.tilt <= MAX_DOWN_TILT);
            prev = bird.tilt;
        }
        assert_eq!(bird.tilt, MAX_DOWN_TILT);
    }

    #[test]
    fn test_wing_frames_cycle() {
        let mut bird = Bird::spawn(600.0);
        let frames: Vec<u32> = (0..16)
            .map(|t| {
                update_wing_frame(&mut bird, t);
                bird.frame
            })
            .collect();
        assert_eq!(frames, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 0]);
    }

    #[test]
    fn test_floor_clamp() {
        let mut bird = Bird::spawn(600.0);
        bird.pos.y = 480.0;
        assert!(clamp_to_floor(&mut bird, 488.0));
        assert_eq!(bird.bottom(), 488.0);

        bird.pos.y = 100.0;
        assert!(!clamp_to_floor(&mut bird, 488.0));
        assert_eq!(bird.pos.y, 100.0);
    }
}
