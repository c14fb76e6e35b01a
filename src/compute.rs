/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::collision::{resolve_collectibles, resolve_obstacle_collisions};
use crate::config::GameConfig;
use crate::entities::{Bird, GameState, Phase, Rgb, Vital};
use crate::particles::{self, FLAP_BURST};
use crate::spawner::{maybe_spawn_collectible, maybe_spawn_obstacle, scroll_collectibles, scroll_obstacles};
use crate::vitals::{apply_decay, apply_neglect_penalties, death_cause};

const WING_STEP: f32 = 0.4;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh, not-yet-started session.  `high_score` is the persisted best.
pub fn init_state(config: GameConfig, high_score: u32) -> GameState {
    GameState {
        bird: Bird::new(&config),
        obstacles: Vec::new(),
        collectibles: Vec::new(),
        particles: Vec::new(),
        score: 0,
        game_started: false,
        game_paused: false,
        game_speed: config.game_speed,
        time_alive: 0.0,
        care_actions: 0,
        last_care_action_ms: 0,
        high_score,
        death_cause: None,
        frame: 0,
        config,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn start_game(state: &GameState) -> GameState {
    if state.phase() != Phase::NotStarted {
        return state.clone();
    }
    GameState {
        game_started: true,
        game_paused: false,
        ..state.clone()
    }
}

/// Running ⇄ Paused.  Ignored before the start and after game over.
pub fn toggle_pause(state: &GameState) -> GameState {
    match state.phase() {
        Phase::Running | Phase::Paused => GameState {
            game_paused: !state.game_paused,
            ..state.clone()
        },
        Phase::NotStarted | Phase::Ended => state.clone(),
    }
}

/// Flap: kick the bird upward at the cost of some energy.  Running out of
/// energy this way kills the bird on the next tick.
pub fn jump(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.phase() != Phase::Running {
        return state.clone();
    }
    let cfg = &state.config;
    let mut bird = Bird {
        velocity: cfg.jump_strength,
        ..state.bird.clone()
    };
    bird.adjust(Vital::Energy, -cfg.jump_energy_cost());

    let mut new_particles = state.particles.clone();
    new_particles.extend(particles::burst(
        bird.x - 10.0,
        bird.y + 15.0,
        Rgb::FLAP,
        FLAP_BURST,
        rng,
    ));

    GameState {
        bird,
        particles: new_particles,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  Does nothing unless the session is
/// running.  All randomness comes through `rng` so callers control
/// determinism (tests use a seeded RNG).
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.phase() != Phase::Running {
        return state.clone();
    }

    let mut next = state.clone();
    let cfg = next.config;
    let dt = cfg.dt();
    let now = state.now_ms();

    // ── 1. Bird kinematics ───────────────────────────────────────────────────
    {
        let bird = &mut next.bird;
        bird.y += bird.velocity;
        bird.velocity += cfg.gravity;
        bird.age += dt;
        bird.wing_phase += WING_STEP;
    }

    // ── 2. Vital decay and neglect ───────────────────────────────────────────
    apply_decay(&mut next.bird, &cfg, dt);
    apply_neglect_penalties(&mut next.bird, &cfg, now);

    // ── 3. Death check ───────────────────────────────────────────────────────
    // The rest of the tick still runs; the session stops scheduling
    // afterwards because the phase is no longer Running.
    let died = match death_cause(&next.bird, &cfg) {
        Some(cause) => {
            next.bird.is_alive = false;
            next.death_cause = Some(cause);
            true
        }
        None => false,
    };

    // ── 4. Particles ─────────────────────────────────────────────────────────
    next.particles = particles::advance(&next.particles);

    // ── 5. Scroll the world ──────────────────────────────────────────────────
    scroll_obstacles(&mut next);
    scroll_collectibles(&mut next);

    // ── 6. Spawn ─────────────────────────────────────────────────────────────
    maybe_spawn_obstacle(&mut next, rng);
    maybe_spawn_collectible(&mut next, rng);

    // ── 7. Collisions and pickups ────────────────────────────────────────────
    resolve_obstacle_collisions(&mut next, rng);
    resolve_collectibles(&mut next, rng);

    // ── 8. Bookkeeping ───────────────────────────────────────────────────────
    // After scoring, so a pass on the death tick counts toward the best.
    if died && next.score > next.high_score {
        next.high_score = next.score;
    }
    next.time_alive += dt;
    next.frame += 1;

    next
}
