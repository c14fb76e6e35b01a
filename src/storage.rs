/// High-score persistence.
///
/// The store is best-effort: reads that fail count as "no saved score" and
/// failed writes are logged and dropped.  Callers never see an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Key the score is stored under.
pub const HIGH_SCORE_KEY: &str = "flappyBirdHighScore";

pub trait HighScoreStore {
    /// Saved best score, or 0 when there is none or it cannot be read.
    fn load(&self) -> u32;
    fn save(&mut self, score: u32);
}

// ── In-memory ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub score: Option<u32>,
    /// Number of successful saves, for callers that care how often we wrote.
    pub writes: u32,
}

impl MemoryStore {
    pub fn with_score(score: u32) -> Self {
        MemoryStore { score: Some(score), writes: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    fn save(&mut self, score: u32) {
        self.score = Some(score);
        self.writes += 1;
    }
}

// ── JSON file ─────────────────────────────────────────────────────────────────

/// A small JSON key-value file, e.g. `{ "flappyBirdHighScore": 12 }`.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// `scores.json` in the platform data directory, if one can be resolved.
    pub fn in_data_dir() -> Option<Self> {
        ProjectDirs::from("com", "flappycare", "FlappyCare")
            .map(|dirs| FileStore::new(dirs.data_local_dir().join("scores.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, serde_json::Value>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let map = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(map)
    }

    fn try_load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }
        let map = self.read_map()?;
        let score = map
            .get(HIGH_SCORE_KEY)
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        Ok(score)
    }

    fn try_save(&self, score: u32) -> Result<()> {
        // Keep whatever else is in the file.
        let mut map = if self.path.exists() {
            self.read_map().unwrap_or_default()
        } else {
            BTreeMap::new()
        };
        map.insert(HIGH_SCORE_KEY.to_string(), score.into());

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&map)?)
            .with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u32 {
        self.try_load().unwrap_or_else(|e| {
            log::warn!("high score unavailable: {e:#}");
            0
        })
    }

    fn save(&mut self, score: u32) {
        match self.try_save(score) {
            Ok(()) => log::info!("saved high score {score} to {}", self.path.display()),
            Err(e) => log::warn!("high score not saved: {e:#}"),
        }
    }
}

/// Used when there is no data directory at all; nothing is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStore;

impl HighScoreStore for NullStore {
    fn load(&self) -> u32 {
        0
    }

    fn save(&mut self, _score: u32) {}
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, score: u32) {
        (**self).save(score)
    }
}
