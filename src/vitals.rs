/// Vital-stat model: passive decay, neglect penalties and the death predicate,
/// plus the read-only mood/needs summaries the HUD shows.

use crate::config::GameConfig;
use crate::entities::{Bird, DeathCause, Vital};

// ── Decay ─────────────────────────────────────────────────────────────────────

/// Passive drain over `dt` simulated seconds.  Energy is left alone; it only
/// drops when the bird flaps.
pub fn apply_decay(bird: &mut Bird, config: &GameConfig, dt: f32) {
    bird.adjust(Vital::Health, -config.health_decay * dt);
    bird.adjust(Vital::Hunger, -config.hunger_decay * dt);
    bird.adjust(Vital::Happiness, -config.happiness_decay * dt);
}

/// Extra flat drain for a bird that has gone unfed or unpetted for too long.
/// Applied once per tick regardless of tick length.
pub fn apply_neglect_penalties(bird: &mut Bird, config: &GameConfig, now_ms: u64) {
    if now_ms.saturating_sub(bird.last_fed_ms) > config.hunger_neglect_ms {
        bird.adjust(Vital::Hunger, -config.hunger_neglect_penalty);
    }
    if now_ms.saturating_sub(bird.last_petted_ms) > config.happiness_neglect_ms {
        bird.adjust(Vital::Happiness, -config.happiness_neglect_penalty);
    }
}

// ── Death ─────────────────────────────────────────────────────────────────────

/// Why the bird would die right now, if it would.  Meters are checked in
/// `Vital::ALL` order before the playfield bounds.
pub fn death_cause(bird: &Bird, config: &GameConfig) -> Option<DeathCause> {
    if let Some(v) = Vital::ALL.into_iter().find(|&v| bird.vital(v) <= 0.0) {
        return Some(v.into());
    }
    if bird.y < 0.0 || bird.y > config.canvas_height - config.bird_size {
        return Some(DeathCause::OutOfBounds);
    }
    None
}

pub fn is_dead(bird: &Bird, config: &GameConfig) -> bool {
    death_cause(bird, config).is_some()
}

// ── HUD summaries ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Dead,
    Ecstatic,
    Happy,
    Okay,
    Sad,
    Miserable,
}

impl Mood {
    pub fn of(bird: &Bird) -> Mood {
        if !bird.is_alive {
            return Mood::Dead;
        }
        match bird.happiness {
            h if h > 80.0 => Mood::Ecstatic,
            h if h > 60.0 => Mood::Happy,
            h if h > 40.0 => Mood::Okay,
            h if h > 20.0 => Mood::Sad,
            _ => Mood::Miserable,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Dead => "Dead",
            Mood::Ecstatic => "Ecstatic",
            Mood::Happy => "Happy",
            Mood::Okay => "Okay",
            Mood::Sad => "Sad",
            Mood::Miserable => "Miserable",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CriticalNeed {
    HealthCritical,
    Starving,
    Exhausted,
    Depressed,
}

impl CriticalNeed {
    pub fn label(self) -> &'static str {
        match self {
            CriticalNeed::HealthCritical => "Health Critical!",
            CriticalNeed::Starving => "Starving!",
            CriticalNeed::Exhausted => "Exhausted!",
            CriticalNeed::Depressed => "Depressed!",
        }
    }
}

pub fn critical_needs(bird: &Bird) -> Vec<CriticalNeed> {
    let mut needs = Vec::new();
    if bird.health < 25.0 {
        needs.push(CriticalNeed::HealthCritical);
    }
    if bird.hunger < 25.0 {
        needs.push(CriticalNeed::Starving);
    }
    if bird.energy < 20.0 {
        needs.push(CriticalNeed::Exhausted);
    }
    if bird.happiness < 25.0 {
        needs.push(CriticalNeed::Depressed);
    }
    needs
}

/// Coarse bucket for colouring a meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatLevel {
    Good,
    Fair,
    Low,
    Critical,
}

impl StatLevel {
    pub fn of(value: f32) -> StatLevel {
        if value > 70.0 {
            StatLevel::Good
        } else if value > 40.0 {
            StatLevel::Fair
        } else if value > 20.0 {
            StatLevel::Low
        } else {
            StatLevel::Critical
        }
    }
}
