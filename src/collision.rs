/// Overlap tests between the bird and the world, and the stat/score effects
/// they trigger.

use rand::Rng;

use crate::entities::{GameState, Rgb, Vital};
use crate::particles::{self, DAMAGE_BURST, PICKUP_BURST, SCORE_BURST};

/// Damage the bird for every obstacle it is touching, and score every
/// obstacle it has just cleared.
///
/// There is no per-obstacle "already hit" flag: while the bird stays inside
/// an obstacle's hit region it takes that obstacle's damage again every tick.
pub fn resolve_obstacle_collisions(state: &mut GameState, rng: &mut impl Rng) {
    let cfg = state.config;
    let size = cfg.bird_size;

    for obstacle in state.obstacles.iter_mut() {
        if obstacle.passed {
            continue;
        }
        let bird = &mut state.bird;

        let overlaps_x = bird.x + size > obstacle.x && bird.x < obstacle.x + cfg.obstacle_width;
        if overlaps_x {
            let hits_top = bird.y < obstacle.top_height;
            let hits_bottom = bird.y + size > cfg.canvas_height - obstacle.bottom_height;
            if hits_top || hits_bottom {
                bird.adjust(Vital::Health, -obstacle.kind.damage());
                state
                    .particles
                    .extend(particles::burst(bird.x, bird.y, Rgb::DAMAGE, DAMAGE_BURST, rng));
            }
        }

        if bird.x > obstacle.x + cfg.obstacle_width {
            obstacle.passed = true;
            state.score += 1;
            state
                .particles
                .extend(particles::burst(bird.x, bird.y, Rgb::SCORE, SCORE_BURST, rng));
        }
    }
}

/// Apply each collectible the bird is close enough to, exactly once.
pub fn resolve_collectibles(state: &mut GameState, rng: &mut impl Rng) {
    let radius = state.config.pickup_radius;
    let now = state.now_ms();

    for item in state.collectibles.iter_mut() {
        if item.collected {
            continue;
        }
        let bird = &mut state.bird;
        if (bird.x - item.x).abs() >= radius || (bird.y - item.y).abs() >= radius {
            continue;
        }

        item.collected = true;
        let (vital, amount) = item.kind.effect();
        bird.adjust(vital, amount);
        match vital {
            Vital::Hunger => bird.last_fed_ms = now,
            Vital::Happiness => bird.last_petted_ms = now,
            Vital::Health | Vital::Energy => {}
        }
        log::debug!("picked up {:?} (+{amount} {})", item.kind, vital.label());
        state
            .particles
            .extend(particles::burst(item.x, item.y, item.kind.glow(), PICKUP_BURST, rng));
    }
}
