use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{SnapshotSlot, STORAGE_KEY};
use flexboard_core::{KanbanError, KanbanResult};
use std::path::{Path, PathBuf};

/// Slot backed by `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    key: String,
    path: PathBuf,
}

impl JsonFileSlot {
    /// The task snapshot slot inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, STORAGE_KEY)
    }

    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            key: key.to_string(),
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, err: KanbanError) -> KanbanError {
        match err {
            KanbanError::Io(source) => KanbanError::storage(&self.key, source),
            other => other,
        }
    }
}

impl SnapshotSlot for JsonFileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> KanbanResult<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = std::fs::read(&self.path)
            .map_err(|e| KanbanError::storage(&self.key, e))?;
        tracing::debug!("Read {} bytes from {}", data.len(), self.path.display());
        Ok(Some(data))
    }

    fn write(&mut self, bytes: &[u8]) -> KanbanResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| KanbanError::storage(&self.key, e))?;
        }
        AtomicWriter::write_atomic(&self.path, bytes).map_err(|e| self.storage_error(e))
    }
}
