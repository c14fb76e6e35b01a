use flappy_care::compute::*;
use flappy_care::config::GameConfig;
use flappy_care::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Running session with pickups switched off so meters only move when a
/// test wants them to.
fn make_state() -> GameState {
    let config = GameConfig {
        collectible_chance: 0.0,
        ..GameConfig::default()
    };
    start_game(&init_state(config, 0))
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Pin the bird mid-air so gravity does not end the run.
fn hover(s: &mut GameState) {
    s.bird.y = 300.0;
    s.bird.velocity = 0.0;
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_defaults() {
    let s = init_state(GameConfig::default(), 12);
    assert_eq!(s.phase(), Phase::NotStarted);
    assert!(s.obstacles.is_empty());
    assert!(s.collectibles.is_empty());
    assert!(s.particles.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.care_actions, 0);
    assert_eq!(s.frame, 0);
    assert_eq!(s.time_alive, 0.0);
    assert_eq!(s.game_speed, 3.0);
    assert_eq!(s.high_score, 12);
    assert_eq!(s.death_cause, None);
}

// ── start / pause ─────────────────────────────────────────────────────────────

#[test]
fn start_moves_to_running() {
    let s = init_state(GameConfig::default(), 0);
    let s2 = start_game(&s);
    assert_eq!(s2.phase(), Phase::Running);
    assert_eq!(s.phase(), Phase::NotStarted);
}

#[test]
fn start_is_ignored_once_running() {
    let mut s = make_state();
    s.game_paused = true;
    let s2 = start_game(&s);
    assert_eq!(s2.phase(), Phase::Paused);
}

#[test]
fn pause_toggles() {
    let s = make_state();
    let paused = toggle_pause(&s);
    assert_eq!(paused.phase(), Phase::Paused);
    let resumed = toggle_pause(&paused);
    assert_eq!(resumed.phase(), Phase::Running);
}

#[test]
fn pause_ignored_before_start_and_after_death() {
    let s = init_state(GameConfig::default(), 0);
    assert_eq!(toggle_pause(&s).phase(), Phase::NotStarted);

    let mut dead = make_state();
    dead.bird.is_alive = false;
    assert_eq!(toggle_pause(&dead).phase(), Phase::Ended);
}

// ── jump ──────────────────────────────────────────────────────────────────────

#[test]
fn jump_kicks_upward_and_costs_energy() {
    let s = make_state();
    let s2 = jump(&s, &mut seeded_rng());
    assert_eq!(s2.bird.velocity, -15.0);
    assert!((s2.bird.energy - 99.52).abs() < 1e-4);
    assert_eq!(s2.particles.len(), 6);
    assert!(s2.particles.iter().all(|p| p.color == Rgb::FLAP));
    assert!(s2.particles.iter().all(|p| p.x == 140.0 && p.y == 315.0));
}

#[test]
fn jump_ignored_unless_running() {
    let not_started = init_state(GameConfig::default(), 0);
    assert_eq!(jump(&not_started, &mut seeded_rng()).bird, not_started.bird);

    let paused = toggle_pause(&make_state());
    assert_eq!(jump(&paused, &mut seeded_rng()).bird, paused.bird);

    let mut dead = make_state();
    dead.bird.is_alive = false;
    let after = jump(&dead, &mut seeded_rng());
    assert_eq!(after.bird, dead.bird);
    assert!(after.particles.is_empty());
}

#[test]
fn jump_energy_floors_at_zero_and_kills_next_tick() {
    let mut s = make_state();
    s.bird.energy = 0.3;
    let s2 = jump(&s, &mut seeded_rng());
    assert_eq!(s2.bird.energy, 0.0);
    assert!(s2.bird.is_alive);

    let s3 = tick(&s2, &mut seeded_rng());
    assert!(!s3.bird.is_alive);
    assert_eq!(s3.death_cause, Some(DeathCause::Energy));
}

// ── tick — clock & kinematics ─────────────────────────────────────────────────

#[test]
fn tick_does_nothing_unless_running() {
    let not_started = init_state(GameConfig::default(), 0);
    let s2 = tick(&not_started, &mut seeded_rng());
    assert_eq!(s2.frame, 0);
    assert_eq!(s2.bird, not_started.bird);

    let paused = toggle_pause(&make_state());
    let s3 = tick(&paused, &mut seeded_rng());
    assert_eq!(s3.frame, 0);
    assert!(s3.obstacles.is_empty());
}

#[test]
fn tick_advances_clock() {
    let s = make_state();
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.frame, 1);
    assert_eq!(s2.now_ms(), 16);
    assert!((s2.time_alive - 0.016).abs() < 1e-6);
    assert!((s2.bird.age - 0.016).abs() < 1e-6);
    assert!((s2.bird.wing_phase - 0.4).abs() < 1e-6);
}

#[test]
fn tick_applies_position_then_gravity() {
    let s = make_state();
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.bird.y, 300.0);
    assert!((s2.bird.velocity - 0.6).abs() < 1e-6);
    let s3 = tick(&s2, &mut seeded_rng());
    assert!((s3.bird.y - 300.6).abs() < 1e-4);
    assert!((s3.bird.velocity - 1.2).abs() < 1e-6);
}

#[test]
fn tick_decays_meters_by_one_frame() {
    let s = make_state();
    let s2 = tick(&s, &mut seeded_rng());
    assert!((s2.bird.health - (100.0 - 0.08 * 0.016)).abs() < 1e-4);
    assert!((s2.bird.hunger - (100.0 - 0.12 * 0.016)).abs() < 1e-4);
    assert!((s2.bird.happiness - (100.0 - 0.06 * 0.016)).abs() < 1e-4);
    assert_eq!(s2.bird.energy, 100.0);
}

#[test]
fn tick_spawns_first_obstacle() {
    let s = make_state();
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.obstacles.len(), 1);
    assert_eq!(s2.obstacles[0].x, 800.0);
}

#[test]
fn tick_does_not_mutate_original() {
    let s = make_state();
    let _ = tick(&s, &mut seeded_rng());
    assert_eq!(s.frame, 0);
    assert!(s.obstacles.is_empty());
}

// ── tick — neglect ────────────────────────────────────────────────────────────

#[test]
fn unfed_bird_starves_faster_than_baseline() {
    let mut s = make_state();
    s.frame = 500; // now = 8000, on the threshold
    let on_threshold = tick(&s, &mut seeded_rng());
    let baseline_drop = 100.0 - on_threshold.bird.hunger;

    let mut s = make_state();
    s.frame = 501; // now = 8016
    let neglected = tick(&s, &mut seeded_rng());
    let neglected_drop = 100.0 - neglected.bird.hunger;

    assert!((baseline_drop - 0.12 * 0.016).abs() < 1e-4);
    assert!((neglected_drop - baseline_drop - 0.8).abs() < 1e-4);
}

#[test]
fn neglect_penalty_repeats_every_tick_until_fed() {
    let mut s = make_state();
    s.frame = 600;
    let mut rng = seeded_rng();
    let mut previous = s.bird.hunger;
    for _ in 0..5 {
        hover(&mut s);
        s = tick(&s, &mut rng);
        assert!(previous - s.bird.hunger > 0.8);
        previous = s.bird.hunger;
    }

    s.bird.last_fed_ms = s.now_ms();
    hover(&mut s);
    let fed = tick(&s, &mut rng);
    assert!(previous - fed.bird.hunger < 0.01);
}

#[test]
fn unpetted_bird_gets_sad() {
    let mut s = make_state();
    s.frame = 751; // now = 12016
    s.bird.last_fed_ms = 12_000;
    let s2 = tick(&s, &mut seeded_rng());
    assert!((100.0 - s2.bird.happiness - 0.5).abs() < 0.01);
    assert!(100.0 - s2.bird.hunger < 0.01);
}

// ── tick — death ──────────────────────────────────────────────────────────────

#[test]
fn starvation_scenario() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    for _ in 0..5_000 {
        if !s.bird.is_alive {
            break;
        }
        hover(&mut s);
        s.obstacles.clear();
        s = tick(&s, &mut rng);
    }
    assert!(!s.bird.is_alive);
    assert_eq!(s.death_cause, Some(DeathCause::Hunger));
    assert_eq!(s.bird.hunger, 0.0);
    assert!(s.bird.health > 0.0);
    assert!(s.bird.energy > 0.0);
    assert!(s.bird.happiness > 0.0);
    assert_eq!(s.phase(), Phase::Ended);
    // 8s grace plus ~124 ticks of penalty.
    assert!((8.0..12.0).contains(&s.time_alive), "{}", s.time_alive);
}

#[test]
fn falling_out_of_the_sky_is_fatal() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    let mut ticks = 0;
    while s.bird.is_alive {
        s.obstacles.clear();
        s = tick(&s, &mut rng);
        ticks += 1;
        assert!(ticks < 100);
    }
    assert_eq!(s.death_cause, Some(DeathCause::OutOfBounds));
    assert!(s.bird.y > 600.0 - 35.0);
}

#[test]
fn flying_off_the_top_is_fatal() {
    let mut s = make_state();
    s.bird.y = 5.0;
    s.bird.velocity = -15.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert!(!s2.bird.is_alive);
    assert_eq!(s2.death_cause, Some(DeathCause::OutOfBounds));
}

#[test]
fn death_is_monotonic() {
    let mut s = make_state();
    s.bird.y = -10.0;
    let mut s = tick(&s, &mut seeded_rng());
    assert!(!s.bird.is_alive);

    // Even with the cause removed, ticking cannot revive the bird.
    s.bird.y = 300.0;
    s.bird.health = 100.0;
    let mut rng = seeded_rng();
    for _ in 0..10 {
        s = tick(&s, &mut rng);
        assert!(!s.bird.is_alive);
    }
}

#[test]
fn death_tick_still_runs_cosmetics() {
    let mut s = make_state();
    s.bird.y = -10.0;
    s.particles = flappy_care::particles::burst(0.0, 0.0, Rgb::SCORE, 3, &mut seeded_rng());
    let s2 = tick(&s, &mut seeded_rng());
    assert!(!s2.bird.is_alive);
    assert_eq!(s2.frame, 1);
    assert_ne!(s2.particles[0].x, 0.0);
}

#[test]
fn no_more_ticks_after_death() {
    let mut s = make_state();
    s.bird.y = -10.0;
    let dead = tick(&s, &mut seeded_rng());
    let after = tick(&dead, &mut seeded_rng());
    assert_eq!(after.frame, dead.frame);
    assert_eq!(after.obstacles, dead.obstacles);
}

#[test]
fn high_score_raised_on_death() {
    let mut s = make_state();
    s.high_score = 3;
    s.score = 7;
    s.bird.y = -10.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.high_score, 7);
}

#[test]
fn pass_on_the_death_tick_counts_toward_best() {
    let mut s = make_state();
    s.high_score = 2;
    s.score = 2;
    s.bird.y = -10.0;
    // Scrolls to 69; trailing edge 149 is behind the bird.
    s.obstacles.push(Obstacle {
        x: 72.0,
        top_height: 80.0,
        bottom_height: 80.0,
        kind: ObstacleKind::Pipe,
        passed: false,
    });
    let s2 = tick(&s, &mut seeded_rng());
    assert!(!s2.bird.is_alive);
    assert_eq!(s2.score, 3);
    assert_eq!(s2.high_score, 3);
}

#[test]
fn high_score_kept_when_not_beaten() {
    let mut s = make_state();
    s.high_score = 9;
    s.score = 7;
    s.bird.y = -10.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.high_score, 9);
}

#[test]
fn high_score_untouched_while_alive() {
    let mut s = make_state();
    s.high_score = 3;
    s.score = 7;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.high_score, 3);
}

// ── tick — scoring ────────────────────────────────────────────────────────────

#[test]
fn successful_pass_scenario() {
    let mut s = make_state();
    s.obstacles.push(Obstacle {
        x: 150.0 + 35.0 + 1.0,
        top_height: 80.0,
        bottom_height: 80.0,
        kind: ObstacleKind::Pipe,
        passed: false,
    });
    let mut rng = seeded_rng();

    // Trailing edge reaches x = 72 + 80 = 152 after 38 ticks: not yet past.
    for _ in 0..38 {
        hover(&mut s);
        s = tick(&s, &mut rng);
    }
    assert_eq!(s.score, 0);

    hover(&mut s);
    s = tick(&s, &mut rng);
    assert_eq!(s.score, 1);
    assert!(s.obstacles[0].passed);

    for _ in 0..20 {
        hover(&mut s);
        s = tick(&s, &mut rng);
    }
    assert_eq!(s.score, 1);
    assert!(s.bird.health > 99.0, "flew through the gap untouched");
}

#[test]
fn passed_obstacle_never_rescores() {
    let mut s = make_state();
    s.obstacles.push(Obstacle {
        x: 0.0,
        top_height: 80.0,
        bottom_height: 80.0,
        kind: ObstacleKind::Storm,
        passed: true,
    });
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.score, 0);
}

#[test]
fn lingering_in_an_obstacle_keeps_hurting() {
    let mut s = make_state();
    s.obstacles.push(Obstacle {
        x: 160.0,
        top_height: 500.0,
        bottom_height: 80.0,
        kind: ObstacleKind::Pipe,
        passed: false,
    });
    let mut rng = seeded_rng();
    for _ in 0..3 {
        hover(&mut s);
        s = tick(&s, &mut rng);
    }
    assert!((s.bird.health - 55.0).abs() < 0.01);
}

// ── tick — pickups ────────────────────────────────────────────────────────────

#[test]
fn pickup_through_tick_applies_once() {
    let mut s = make_state();
    s.bird.happiness = 10.0;
    s.collectibles.push(Collectible {
        x: 153.0, // scrolls to 150
        y: 300.0,
        kind: CollectibleKind::Toy,
        collected: false,
        pulse_phase: 0.0,
    });
    let mut rng = seeded_rng();
    hover(&mut s);
    s = tick(&s, &mut rng);
    assert!(s.collectibles[0].collected);
    let after_pickup = s.bird.happiness;
    assert!(after_pickup > 49.9);

    for _ in 0..5 {
        hover(&mut s);
        s = tick(&s, &mut rng);
    }
    assert!(s.bird.happiness <= after_pickup);
}

#[test]
fn meters_stay_in_bounds_over_a_long_run() {
    let config = GameConfig {
        collectible_chance: 0.3,
        ..GameConfig::default()
    };
    let mut s = start_game(&init_state(config, 0));
    let mut rng = seeded_rng();
    for i in 0..2_000 {
        hover(&mut s);
        if i % 10 == 0 {
            s = jump(&s, &mut rng);
        }
        s = tick(&s, &mut rng);
        for v in Vital::ALL {
            let m = s.bird.vital(v);
            assert!((0.0..=100.0).contains(&m), "{v:?} = {m}");
        }
    }
}
