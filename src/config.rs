/// Tunable game constants.
///
/// Everything the simulation treats as fixed (playfield geometry, decay
/// rates, spawn odds) lives in one `Copy` struct so it can ride along inside
/// the game state and be overridden from a JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "FLAPPY_CARE_CONFIG";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Kinematics ──────────────────────────────────────────────────────────
    /// Added to the bird's velocity every tick.
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward).
    pub jump_strength: f32,
    /// Horizontal scroll per tick.
    pub game_speed: f32,

    // ── Playfield geometry ──────────────────────────────────────────────────
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub bird_size: f32,
    pub bird_start_x: f32,
    pub bird_start_y: f32,
    pub obstacle_width: f32,
    /// Minimum horizontal distance between consecutive obstacles.
    pub obstacle_spacing: f32,
    pub obstacle_min_height: f32,
    pub obstacle_height_span: f32,

    // ── Vital meters ────────────────────────────────────────────────────────
    /// Per simulated second.
    pub health_decay: f32,
    pub hunger_decay: f32,
    pub happiness_decay: f32,
    /// Energy only drains through flapping: each flap costs
    /// `energy_decay * jump_energy_multiplier`.
    pub energy_decay: f32,
    pub jump_energy_multiplier: f32,

    // ── Neglect ─────────────────────────────────────────────────────────────
    pub hunger_neglect_ms: u64,
    /// Flat amount per tick, not scaled by dt.
    pub hunger_neglect_penalty: f32,
    pub happiness_neglect_ms: u64,
    pub happiness_neglect_penalty: f32,

    // ── Collectibles ────────────────────────────────────────────────────────
    pub collectible_chance: f64,
    /// Keep-out band at the top and bottom of the playfield.
    pub collectible_margin: f32,
    pub pickup_radius: f32,
    pub collectible_despawn_x: f32,

    // ── Clock ───────────────────────────────────────────────────────────────
    /// Simulated milliseconds per tick.
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_strength: -15.0,
            game_speed: 3.0,

            canvas_width: 800.0,
            canvas_height: 600.0,
            bird_size: 35.0,
            bird_start_x: 150.0,
            bird_start_y: 300.0,
            obstacle_width: 80.0,
            obstacle_spacing: 350.0,
            obstacle_min_height: 80.0,
            obstacle_height_span: 180.0,

            health_decay: 0.08,
            hunger_decay: 0.12,
            happiness_decay: 0.06,
            energy_decay: 0.04,
            jump_energy_multiplier: 12.0,

            hunger_neglect_ms: 8_000,
            hunger_neglect_penalty: 0.8,
            happiness_neglect_ms: 12_000,
            happiness_neglect_penalty: 0.5,

            collectible_chance: 0.025,
            collectible_margin: 75.0,
            pickup_radius: 35.0,
            collectible_despawn_x: -30.0,

            tick_ms: 16,
        }
    }
}

impl GameConfig {
    /// Simulated seconds covered by one tick.
    pub fn dt(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }

    /// Energy consumed by a single flap.
    pub fn jump_energy_cost(&self) -> f32 {
        self.energy_decay * self.jump_energy_multiplier
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Load from `$FLAPPY_CARE_CONFIG` or the platform config dir.
    /// A missing file is normal; a broken one is logged. Both give defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e:#}; using default config");
                Self::default()
            }
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    ProjectDirs::from("com", "flappycare", "FlappyCare")
        .map(|dirs| dirs.config_dir().join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flap_cost_is_twelve_ticks_of_energy_decay() {
        let c = GameConfig::default();
        assert!((c.jump_energy_cost() - 0.48).abs() < 1e-6);
        assert!((c.dt() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let c: GameConfig = serde_json::from_str(r#"{ "gravity": 1.0, "tick_ms": 20 }"#).unwrap();
        assert_eq!(c.gravity, 1.0);
        assert_eq!(c.tick_ms, 20);
        assert_eq!(c.canvas_width, 800.0);
        assert_eq!(c.pickup_radius, 35.0);
    }
}
