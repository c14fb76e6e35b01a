/// Session lifecycle: owns the game state, the care inventory, the RNG, the
/// high-score store and the frame scheduler, and sequences them.
///
/// Phase machine:
///
/// ```text
///   NotStarted --start--> Running <--toggle_pause--> Paused
///                            |
///                       (bird dies)
///                            v
///   Running <--restart-- Ended
/// ```
///
/// The scheduler is registered exactly while the phase is `Running`.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::care::{self, CareInventory, CareKind};
use crate::compute::{init_state, jump, start_game, tick, toggle_pause};
use crate::config::GameConfig;
use crate::entities::{GameState, Phase};
use crate::scheduler::FrameScheduler;
use crate::storage::HighScoreStore;

pub struct Session<S: HighScoreStore> {
    state: GameState,
    inventory: CareInventory,
    store: S,
    rng: StdRng,
    scheduler: FrameScheduler,
}

impl<S: HighScoreStore> Session<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, store: S, rng: StdRng) -> Self {
        let high_score = store.load();
        let interval = Duration::from_millis(config.tick_ms.max(1));
        Session {
            state: init_state(config, high_score),
            inventory: CareInventory::default(),
            store,
            rng,
            scheduler: FrameScheduler::new(interval),
        }
    }

    /// Pick up an existing state, e.g. a scripted scenario.  The store is
    /// still read once; a running state arms the scheduler at `now`.
    pub fn from_state(state: GameState, store: S, rng: StdRng, now: Instant) -> Self {
        let mut session = Self::with_rng(state.config, store, rng);
        let high_score = state.high_score.max(session.state.high_score);
        session.state = GameState { high_score, ..state };
        if session.phase() == Phase::Running {
            session.scheduler.register(now);
        }
        session
    }

    // ── Read-only views for renderers ────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn inventory(&self) -> &CareInventory {
        &self.inventory
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    // ── Lifecycle commands ───────────────────────────────────────────────────

    pub fn start(&mut self, now: Instant) {
        if self.phase() != Phase::NotStarted {
            return;
        }
        self.state = start_game(&self.state);
        self.scheduler.register(now);
        log::info!("session started (best {})", self.state.high_score);
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        self.state = toggle_pause(&self.state);
        match self.phase() {
            Phase::Paused => {
                self.scheduler.deregister();
                log::info!("paused at {:.1}s", self.state.time_alive);
            }
            Phase::Running if !self.scheduler.is_registered() => {
                self.scheduler.register(now);
                log::info!("resumed");
            }
            _ => {}
        }
    }

    /// Throw the current run away and start a new one straight away.  Only
    /// the high score survives.
    pub fn restart(&mut self, now: Instant) {
        self.scheduler.deregister();
        let high_score = self.state.high_score;
        self.state = start_game(&init_state(self.state.config, high_score));
        self.inventory = CareInventory::default();
        self.scheduler.register(now);
        log::info!("session restarted (best {high_score})");
    }

    /// Teardown: make sure no frame fires after the host goes away.
    pub fn shutdown(&mut self) {
        if self.scheduler.deregister().is_some() {
            log::debug!("frame scheduler released");
        }
    }

    // ── Player actions ───────────────────────────────────────────────────────

    pub fn flap(&mut self) {
        self.state = jump(&self.state, &mut self.rng);
    }

    pub fn use_care_item(&mut self, kind: CareKind) {
        let (state, inventory) =
            care::use_care_item(&self.state, &self.inventory, kind, &mut self.rng);
        self.state = state;
        self.inventory = inventory;
    }

    pub fn pet(&mut self) {
        self.state = care::pet_bird(&self.state, &mut self.rng);
    }

    // ── Clock ────────────────────────────────────────────────────────────────

    /// Run one tick if the scheduler says a frame is due.  Returns whether a
    /// tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.scheduler.poll(now) {
            Some(token) => {
                log::trace!("frame {token:?}");
                self.step()
            }
            None => false,
        }
    }

    /// Run one tick immediately, bypassing frame timing.  No-op unless
    /// running.
    pub fn step(&mut self) -> bool {
        if self.phase() != Phase::Running {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        let was_alive = self.state.bird.is_alive;
        let best_before = self.state.high_score;
        self.state = tick(&self.state, &mut self.rng);

        if was_alive && !self.state.bird.is_alive {
            self.on_game_over(best_before);
        }
        if self.phase() != Phase::Running {
            self.scheduler.deregister();
        }
    }

    /// `best_before` is the session's copy of the best score; the store is
    /// only read at construction.
    fn on_game_over(&mut self, best_before: u32) {
        let score = self.state.score;
        log::info!(
            "game over: score {score}, {:.1}s, cause {:?}",
            self.state.time_alive,
            self.state.death_cause
        );
        if score > best_before {
            self.store.save(score);
        }
    }
}
