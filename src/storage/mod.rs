//! Filesystem snapshot loading.
//!
//! Snapshots are JSONL files (one JSON object per line) exported by the
//! tracker that records games. This crate only reads them; recording is the
//! tracker's job.

mod jsonl;

pub use jsonl::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading snapshots.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Location of the snapshot files.
#[derive(Debug, Clone)]
pub struct SnapshotDir {
    pub data_dir: PathBuf,
}

impl SnapshotDir {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the snapshot file for an entity type.
    pub fn entity_path(&self, entity: EntityType) -> PathBuf {
        self.data_dir.join(entity.filename())
    }
}

impl Default for SnapshotDir {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
