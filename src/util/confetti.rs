//! Celebration confetti: pure particle generation for the winner overlay.
//!
//! The overlay renders one absolutely-positioned span per particle and
//! lets a CSS keyframe animation do the falling; this module only decides
//! where each particle starts, when it drops, and how long it falls.

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use crate::util::wheel_math::WHEEL_COLORS;

pub const CONFETTI_PARTICLES: usize = 80;
pub const CONFETTI_MIN_FALL_MS: f64 = 2200.0;
pub const CONFETTI_MAX_FALL_MS: f64 = 3800.0;
pub const CONFETTI_MAX_DELAY_MS: f64 = 600.0;

/// One falling confetti particle; fields become inline CSS.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub delay_ms: f64,
    pub fall_ms: f64,
    pub drift_deg: f64,
    pub color: &'static str,
}

/// Build a burst of `count` particles from a unit-sample source.
pub fn burst(count: usize, mut sample: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|index| {
            let left_pct = unit(sample()) * 100.0;
            let delay_ms = unit(sample()) * CONFETTI_MAX_DELAY_MS;
            let fall_ms =
                CONFETTI_MIN_FALL_MS + unit(sample()) * (CONFETTI_MAX_FALL_MS - CONFETTI_MIN_FALL_MS);
            let drift_deg = (unit(sample()) - 0.5) * 720.0;
            Particle {
                left_pct,
                delay_ms,
                fall_ms,
                drift_deg,
                color: WHEEL_COLORS[index % WHEEL_COLORS.len()],
            }
        })
        .collect()
}

fn unit(sample: f64) -> f64 {
    if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.5 }
}

/// Inline style string for one particle.
pub fn particle_style(particle: &Particle) -> String {
    format!(
        "left: {:.2}%; background: {}; animation-delay: {:.0}ms; animation-duration: {:.0}ms; --confetti-drift: {:.0}deg;",
        particle.left_pct, particle.color, particle.delay_ms, particle.fall_ms, particle.drift_deg
    )
}
