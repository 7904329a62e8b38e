//! Persisted restaurant choice.
//!
//! A single JSON document under the platform config dir remembers the
//! visitor's restaurant between sessions. Every failure mode (missing
//! dir, unreadable file, stale id) degrades to "ask again"; nothing
//! here is allowed to surface an error to the user.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use naka_model::{RestaurantDirectory, RestaurantId};

const APP_DIR: &str = "petit-naka";
const FILE_NAME: &str = "selection.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    pub restaurant_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("no writable config directory")]
    NoConfigDir,
}

/// File-backed store for the chosen restaurant id.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    base: Option<PathBuf>,
}

impl SelectionStore {
    /// Store rooted at an explicit directory (tests use a temp dir).
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    /// Store under the platform config dir; `base` is `None` when the
    /// platform offers none, in which case loads yield absence and
    /// saves fail quietly at the call site.
    pub fn from_platform() -> Self {
        Self {
            base: dirs::config_dir().map(|dir| dir.join(APP_DIR)),
        }
    }

    fn file(&self) -> Option<PathBuf> {
        self.base.as_ref().map(|base| base.join(FILE_NAME))
    }

    /// Read the stored selection. Any failure counts as absence.
    pub fn load(&self) -> Selection {
        let Some(path) = self.file() else {
            return Selection::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Selection::default(),
        }
    }

    pub fn save(&self, selection: &Selection) -> Result<(), StoreError> {
        let base = self.base.as_ref().ok_or(StoreError::NoConfigDir)?;
        std::fs::create_dir_all(base)?;
        let content = serde_json::to_string_pretty(selection)?;
        std::fs::write(base.join(FILE_NAME), content)?;
        Ok(())
    }

    /// Resolve the stored id against the known set. An id that no
    /// longer matches a known restaurant counts as absence, which
    /// reopens the choice prompt.
    pub fn resolve(&self, directory: &RestaurantDirectory) -> Option<RestaurantId> {
        let stored = self.load().restaurant_id.map(RestaurantId::new)?;
        directory.contains(&stored).then_some(stored)
    }
}
