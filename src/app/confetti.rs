//! Confetti burst shown after a "yes".
//!
//! Positions are fractions of the drawing area so the renderer can scale
//! them to any terminal size.

use super::animation::ease_out_cubic;
use rand::RngExt;
use std::time::{Duration, Instant};

/// Number of colors the renderer's confetti palette must provide.
pub const PALETTE_SIZE: usize = 4;

const STAGGER: Duration = Duration::from_millis(25);
const LAUNCH_Y: f32 = 0.25;
const FALL_DISTANCE: f32 = 0.8;

#[derive(Debug, Clone)]
pub struct Particle {
    pub origin_x: f32,
    pub drift: f32,
    pub delay: Duration,
    pub lifetime: Duration,
    pub color: usize,
    pub round: bool,
}

/// One particle's position in a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub x: f32,
    pub y: f32,
    pub color: usize,
    pub round: bool,
}

#[derive(Debug, Clone)]
pub struct Confetti {
    started: Instant,
    ttl: Duration,
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn burst(pieces: usize, ttl: Duration, now: Instant) -> Self {
        let mut rng = rand::rng();
        let particles = (0..pieces)
            .map(|i| Particle {
                origin_x: rng.random_range(0.4..0.6),
                drift: rng.random_range(-0.25..0.25),
                delay: STAGGER * i as u32,
                lifetime: Duration::from_millis(rng.random_range(1500..3000)),
                color: rng.random_range(0..PALETTE_SIZE),
                round: rng.random_range(0..2) == 0,
            })
            .collect();
        Self {
            started: now,
            ttl,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.ttl
    }

    /// Particles in flight at `now`, positioned within `[0, 1)` on both axes.
    pub fn frame(&self, now: Instant) -> Vec<Spark> {
        let elapsed = now.saturating_duration_since(self.started);
        self.particles
            .iter()
            .filter_map(|p| {
                let flying = elapsed.checked_sub(p.delay)?;
                let progress = flying.as_secs_f64() / p.lifetime.as_secs_f64();
                if progress >= 1.0 {
                    return None;
                }
                let eased = ease_out_cubic(progress) as f32;
                let x = p.origin_x + p.drift * eased;
                let y = LAUNCH_Y + FALL_DISTANCE * eased;
                if !(0.0..1.0).contains(&x) || !(0.0..1.0).contains(&y) {
                    return None;
                }
                Some(Spark {
                    x,
                    y,
                    color: p.color,
                    round: p.round,
                })
            })
            .collect()
    }
}
