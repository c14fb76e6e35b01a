/// Scrolling and procedural spawning of obstacles and collectibles.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::entities::{Collectible, CollectibleKind, GameState, Obstacle, ObstacleKind};

const PULSE_STEP: f32 = 0.15;

/// Shift every obstacle left by the scroll speed and drop the ones fully
/// past the left edge.
pub fn scroll_obstacles(state: &mut GameState) {
    let speed = state.game_speed;
    let min_x = -state.config.obstacle_width;
    state.obstacles.retain_mut(|o| {
        o.x -= speed;
        o.x > min_x
    });
}

pub fn scroll_collectibles(state: &mut GameState) {
    let speed = state.game_speed;
    let min_x = state.config.collectible_despawn_x;
    state.collectibles.retain_mut(|c| {
        c.x -= speed;
        c.pulse_phase += PULSE_STEP;
        c.x > min_x
    });
}

/// Add an obstacle at the right edge once the newest one has moved far
/// enough left.  Top and bottom heights are drawn independently, so the
/// passable gap varies from obstacle to obstacle.
pub fn maybe_spawn_obstacle(state: &mut GameState, rng: &mut impl Rng) {
    let cfg = state.config;
    let gate = match state.obstacles.last() {
        None => true,
        Some(last) => last.x < cfg.canvas_width - cfg.obstacle_spacing,
    };
    if !gate {
        return;
    }

    let kind = *ObstacleKind::ALL.choose(rng).unwrap_or(&ObstacleKind::Pipe);
    let obstacle = Obstacle {
        x: cfg.canvas_width,
        top_height: cfg.obstacle_min_height + rng.gen::<f32>() * cfg.obstacle_height_span,
        bottom_height: cfg.obstacle_min_height + rng.gen::<f32>() * cfg.obstacle_height_span,
        kind,
        passed: false,
    };
    log::debug!("spawned {} obstacle", kind.label());
    state.obstacles.push(obstacle);
}

/// Independent coin flip each tick.
pub fn maybe_spawn_collectible(state: &mut GameState, rng: &mut impl Rng) {
    let cfg = state.config;
    if !rng.gen_bool(cfg.collectible_chance.clamp(0.0, 1.0)) {
        return;
    }

    let kind = *CollectibleKind::ALL.choose(rng).unwrap_or(&CollectibleKind::Food);
    let band = (cfg.canvas_height - 2.0 * cfg.collectible_margin).max(0.0);
    state.collectibles.push(Collectible {
        x: cfg.canvas_width,
        y: cfg.collectible_margin + rng.gen::<f32>() * band,
        kind,
        collected: false,
        pulse_phase: 0.0,
    });
}
