/// Short-lived feedback particles.  No gameplay effect.

use rand::Rng;

use crate::entities::{Particle, Rgb};

/// Per-tick velocity damping.
const DRAG: f32 = 0.98;
/// Per-tick size shrink.
const SHRINK: f32 = 0.99;
const MAX_SPEED: f32 = 4.0;

// Burst sizes for each event that emits particles.
pub const FLAP_BURST: usize = 6;
pub const PET_BURST: usize = 15;
pub const DAMAGE_BURST: usize = 20;
pub const SCORE_BURST: usize = 10;
pub const PICKUP_BURST: usize = 15;

/// Spawn `count` particles at one point, scattering in random directions.
pub fn burst(x: f32, y: f32, color: Rgb, count: usize, rng: &mut impl Rng) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x,
            y,
            vx: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            life: 1.0,
            max_life: rng.gen_range(30.0..50.0),
            color,
            size: rng.gen_range(3.0..7.0),
        })
        .collect()
}

/// Move, damp and age every particle by one tick, dropping the expired ones.
pub fn advance(particles: &[Particle]) -> Vec<Particle> {
    particles
        .iter()
        .map(|p| Particle {
            x: p.x + p.vx,
            y: p.y + p.vy,
            vx: p.vx * DRAG,
            vy: p.vy * DRAG,
            life: p.life - 1.0 / p.max_life,
            size: p.size * SHRINK,
            ..p.clone()
        })
        .filter(|p| p.life > 0.0)
        .collect()
}
