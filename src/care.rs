/// Care economy: a finite stock of consumables the player spends to restore
/// the bird's meters, plus free petting.
///
/// The inventory is a sibling of `GameState`, not part of it.  The tick
/// pipeline never touches it; in-world pickups boost meters directly.

use rand::Rng;

use crate::entities::{GameState, Rgb, Vital};
use crate::particles::{self, PET_BURST};

const PET_BOOST: f32 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CareKind {
    Food,
    Medicine,
    Energy,
    Toy,
}

impl CareKind {
    pub const ALL: [CareKind; 4] = [CareKind::Food, CareKind::Medicine, CareKind::Energy, CareKind::Toy];

    pub fn boost(self) -> (Vital, f32) {
        match self {
            CareKind::Food => (Vital::Hunger, 40.0),
            CareKind::Medicine => (Vital::Health, 30.0),
            CareKind::Energy => (Vital::Energy, 50.0),
            CareKind::Toy => (Vital::Happiness, 25.0),
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            CareKind::Food => Rgb::FOOD,
            CareKind::Medicine => Rgb::MEDICINE,
            CareKind::Energy => Rgb::ENERGY,
            CareKind::Toy => Rgb::TOY,
        }
    }

    pub fn burst_size(self) -> usize {
        match self {
            CareKind::Food => 12,
            CareKind::Medicine => 10,
            CareKind::Energy => 15,
            CareKind::Toy => 20,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CareKind::Food => "Food",
            CareKind::Medicine => "Medicine",
            CareKind::Energy => "Energy",
            CareKind::Toy => "Toys",
        }
    }
}

// ── Inventory ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CareInventory {
    pub food: u32,
    pub medicine: u32,
    pub energy: u32,
    pub toy: u32,
}

impl Default for CareInventory {
    fn default() -> Self {
        CareInventory { food: 3, medicine: 2, energy: 3, toy: 2 }
    }
}

impl CareInventory {
    pub fn count(&self, kind: CareKind) -> u32 {
        match kind {
            CareKind::Food => self.food,
            CareKind::Medicine => self.medicine,
            CareKind::Energy => self.energy,
            CareKind::Toy => self.toy,
        }
    }

    fn slot_mut(&mut self, kind: CareKind) -> &mut u32 {
        match kind {
            CareKind::Food => &mut self.food,
            CareKind::Medicine => &mut self.medicine,
            CareKind::Energy => &mut self.energy,
            CareKind::Toy => &mut self.toy,
        }
    }

    /// Remove one item.  Returns false (and changes nothing) when out of stock.
    pub fn take(&mut self, kind: CareKind) -> bool {
        let slot = self.slot_mut(kind);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn is_empty(&self) -> bool {
        CareKind::ALL.iter().all(|&k| self.count(k) == 0)
    }
}

// ── Player-invoked actions (pure) ─────────────────────────────────────────────

/// Spend one `kind` item on the bird.  A dead bird or an empty slot makes
/// this a no-op: both returned values equal the inputs.
pub fn use_care_item(
    state: &GameState,
    inventory: &CareInventory,
    kind: CareKind,
    rng: &mut impl Rng,
) -> (GameState, CareInventory) {
    if !state.bird.is_alive || inventory.count(kind) == 0 {
        log::debug!("{} rejected", kind.label());
        return (state.clone(), inventory.clone());
    }

    let mut inventory = inventory.clone();
    inventory.take(kind);

    let mut next = state.clone();
    let now = next.now_ms();
    let (vital, amount) = kind.boost();
    next.bird.adjust(vital, amount);
    if kind == CareKind::Food {
        next.bird.last_fed_ms = now;
    }
    next.particles.extend(particles::burst(
        next.bird.x,
        next.bird.y,
        kind.color(),
        kind.burst_size(),
        rng,
    ));
    next.care_actions += 1;
    next.last_care_action_ms = now;

    log::debug!("used {} ({} left)", kind.label(), inventory.count(kind));
    (next, inventory)
}

/// Free, unlimited happiness boost.
pub fn pet_bird(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.bird.is_alive {
        return state.clone();
    }

    let mut next = state.clone();
    let now = next.now_ms();
    next.bird.adjust(Vital::Happiness, PET_BOOST);
    next.bird.last_petted_ms = now;
    next.particles
        .extend(particles::burst(next.bird.x, next.bird.y, Rgb::PET, PET_BURST, rng));
    next.care_actions += 1;
    next.last_care_action_ms = now;
    next
}
