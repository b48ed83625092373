use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::app_dirs::AppDirs;

/// Best score per player name. The BTreeMap keeps iteration in name order,
/// which the leaderboard relies on to break score ties deterministically.
pub type Scores = BTreeMap<String, u32>;

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("failed to access score store: {0}")]
    Io(#[from] io::Error),
    #[error("score store is not a valid name-to-score mapping: {0}")]
    Format(#[from] serde_json::Error),
}

pub trait ScoreStore {
    /// Read the persisted mapping. A store that does not exist yet is an
    /// empty mapping; content that is not a name-to-score mapping is an error.
    fn load(&self) -> Result<Scores, ScoreStoreError>;

    /// Overwrite the store with `scores` in full. Merging against previous
    /// content is the caller's job, see [`record_score`].
    fn save(&self, scores: &Scores) -> Result<(), ScoreStoreError>;
}

impl<T: ScoreStore> ScoreStore for &T {
    fn load(&self) -> Result<Scores, ScoreStoreError> {
        (**self).load()
    }

    fn save(&self, scores: &Scores) -> Result<(), ScoreStoreError> {
        (**self).save(scores)
    }
}

/// Fold a finished round's score into the mapping, keeping the best score
/// seen so far for that name.
pub fn record_score(scores: &mut Scores, name: &str, score: u32) {
    scores
        .entry(name.to_string())
        .and_modify(|best| *best = (*best).max(score))
        .or_insert(score);
}

/// JSON file-backed score store
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::scores_path().unwrap_or_else(|| PathBuf::from("hilo_scores.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<Scores, ScoreStoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Scores::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, scores: &Scores) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(scores)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// In-memory score store for unit tests
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    scores: RefCell<Scores>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: Scores) -> Self {
        Self {
            scores: RefCell::new(scores),
        }
    }

    pub fn snapshot(&self) -> Scores {
        self.scores.borrow().clone()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<Scores, ScoreStoreError> {
        Ok(self.scores.borrow().clone())
    }

    fn save(&self, scores: &Scores) -> Result<(), ScoreStoreError> {
        *self.scores.borrow_mut() = scores.clone();
        Ok(())
    }
}
