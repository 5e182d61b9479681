use flexboard_core::KanbanResult;
use std::io::Write;
use std::path::Path;

/// Replaces files through a temp file in the same directory plus a rename,
/// so readers never observe a half-written snapshot.
pub struct AtomicWriter;

impl AtomicWriter {
    pub fn write_atomic(path: &Path, data: &[u8]) -> KanbanResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("slot.json");

        AtomicWriter::write_atomic(&file_path, b"[]").unwrap();

        assert_eq!(std::fs::read(&file_path).unwrap(), b"[]");
    }

    #[test]
    fn test_atomic_write_overwrites_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("slot.json");

        AtomicWriter::write_atomic(&file_path, b"First").unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").unwrap();

        assert_eq!(std::fs::read(&file_path).unwrap(), b"Second");
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
