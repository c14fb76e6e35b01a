/// All game entity types — pure data, no simulation logic.

use crate::config::GameConfig;

pub const METER_MIN: f32 = 0.0;
pub const METER_MAX: f32 = 100.0;

// ── Colours ───────────────────────────────────────────────────────────────────

/// Particle colour.  Renderers map it onto whatever palette they have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const FOOD: Rgb = Rgb(0x10, 0xB9, 0x81);
    pub const MEDICINE: Rgb = Rgb(0xEF, 0x44, 0x44);
    pub const ENERGY: Rgb = Rgb(0xF5, 0x9E, 0x0B);
    pub const TOY: Rgb = Rgb(0x8B, 0x5C, 0xF6);
    pub const PET: Rgb = Rgb(0xFF, 0x69, 0xB4);
    pub const FLAP: Rgb = Rgb(0x60, 0xA5, 0xFA);
    pub const DAMAGE: Rgb = Rgb(0xFF, 0x00, 0x00);
    pub const SCORE: Rgb = Rgb(0xFF, 0xD7, 0x00);
}

// ── Vital meters ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vital {
    Health,
    Hunger,
    Energy,
    Happiness,
}

impl Vital {
    pub const ALL: [Vital; 4] = [Vital::Health, Vital::Hunger, Vital::Energy, Vital::Happiness];

    pub fn label(self) -> &'static str {
        match self {
            Vital::Health => "Health",
            Vital::Hunger => "Hunger",
            Vital::Energy => "Energy",
            Vital::Happiness => "Happiness",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathCause {
    Health,
    Hunger,
    Energy,
    Happiness,
    /// Flew above the top edge or fell below the floor.
    OutOfBounds,
}

impl From<Vital> for DeathCause {
    fn from(v: Vital) -> Self {
        match v {
            Vital::Health => DeathCause::Health,
            Vital::Hunger => DeathCause::Hunger,
            Vital::Energy => DeathCause::Energy,
            Vital::Happiness => DeathCause::Happiness,
        }
    }
}

// ── Bird ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, positive = falling.
    pub velocity: f32,
    pub health: f32,
    pub hunger: f32,
    pub energy: f32,
    pub happiness: f32,
    /// Cleared exactly once per session; only a restart brings the bird back.
    pub is_alive: bool,
    /// Simulated clock reading of the last feeding.
    pub last_fed_ms: u64,
    pub last_petted_ms: u64,
    /// Simulated seconds alive.
    pub age: f32,
    /// Animation only.
    pub wing_phase: f32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Bird {
            x: config.bird_start_x,
            y: config.bird_start_y,
            velocity: 0.0,
            health: METER_MAX,
            hunger: METER_MAX,
            energy: METER_MAX,
            happiness: METER_MAX,
            is_alive: true,
            last_fed_ms: 0,
            last_petted_ms: 0,
            age: 0.0,
            wing_phase: 0.0,
        }
    }

    pub fn vital(&self, vital: Vital) -> f32 {
        match vital {
            Vital::Health => self.health,
            Vital::Hunger => self.hunger,
            Vital::Energy => self.energy,
            Vital::Happiness => self.happiness,
        }
    }

    /// Every meter write goes through here so the [0, 100] bound always holds.
    pub fn set_vital(&mut self, vital: Vital, value: f32) {
        let value = value.clamp(METER_MIN, METER_MAX);
        match vital {
            Vital::Health => self.health = value,
            Vital::Hunger => self.hunger = value,
            Vital::Energy => self.energy = value,
            Vital::Happiness => self.happiness = value,
        }
    }

    pub fn adjust(&mut self, vital: Vital, delta: f32) {
        self.set_vital(vital, self.vital(vital) + delta);
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Pipe,
    Pollution,
    Storm,
    Predator,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Pipe,
        ObstacleKind::Pollution,
        ObstacleKind::Storm,
        ObstacleKind::Predator,
    ];

    /// Health removed per tick of contact.
    pub fn damage(self) -> f32 {
        match self {
            ObstacleKind::Pipe => 15.0,
            ObstacleKind::Pollution => 25.0,
            ObstacleKind::Storm => 20.0,
            ObstacleKind::Predator => 35.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ObstacleKind::Pipe => "Pipe",
            ObstacleKind::Pollution => "Pollution",
            ObstacleKind::Storm => "Storm",
            ObstacleKind::Predator => "Predator",
        }
    }
}

/// A pair of columns hanging from the top and rising from the floor.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    pub kind: ObstacleKind,
    /// Set once the bird clears it, so it scores only once.
    pub passed: bool,
}

// ── Collectibles ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectibleKind {
    Food,
    Medicine,
    Energy,
    Toy,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 4] = [
        CollectibleKind::Food,
        CollectibleKind::Medicine,
        CollectibleKind::Energy,
        CollectibleKind::Toy,
    ];

    /// The meter this pickup restores and by how much.
    pub fn effect(self) -> (Vital, f32) {
        match self {
            CollectibleKind::Food => (Vital::Hunger, 30.0),
            CollectibleKind::Medicine => (Vital::Health, 25.0),
            CollectibleKind::Energy => (Vital::Energy, 35.0),
            CollectibleKind::Toy => (Vital::Happiness, 40.0),
        }
    }

    pub fn glow(self) -> Rgb {
        match self {
            CollectibleKind::Food => Rgb(0x34, 0xD3, 0x99),
            CollectibleKind::Medicine => Rgb(0xF8, 0x71, 0x71),
            CollectibleKind::Energy => Rgb(0xFB, 0xBF, 0x24),
            CollectibleKind::Toy => Rgb(0xA7, 0x8B, 0xFA),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    /// Centre.
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
    /// Guards against applying the effect twice.  Collected items are kept
    /// until they scroll off but are not drawn.
    pub collected: bool,
    pub pulse_phase: f32,
}

// ── Particles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining fraction, 1.0 at birth.
    pub life: f32,
    /// Lifetime in ticks.
    pub max_life: f32,
    pub color: Rgb,
    pub size: f32,
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    Ended,
}

/// The entire game state.  Cloneable so the pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub game_started: bool,
    pub game_paused: bool,
    pub game_speed: f32,
    /// Simulated seconds since the session started running.
    pub time_alive: f32,
    pub care_actions: u32,
    pub last_care_action_ms: u64,
    pub high_score: u32,
    /// Set on the tick the bird dies.
    pub death_cause: Option<DeathCause>,
    /// Ticks executed so far; drives the simulated clock.
    pub frame: u64,
    pub config: GameConfig,
}

impl GameState {
    pub fn phase(&self) -> Phase {
        if !self.game_started {
            Phase::NotStarted
        } else if !self.bird.is_alive {
            Phase::Ended
        } else if self.game_paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Simulated wall clock in milliseconds.  Advances only while running.
    pub fn now_ms(&self) -> u64 {
        self.frame * self.config.tick_ms
    }
}
