use crate::traits::{SnapshotSlot, STORAGE_KEY};
use flexboard_core::{KanbanError, KanbanResult};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct SlotState {
    value: Option<Vec<u8>>,
    reject_writes: bool,
    writes: usize,
}

/// In-memory slot. Clones share the same value, so a test can hand one
/// clone to a store and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    state: Rc<RefCell<SlotState>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: &[u8]) -> Self {
        let slot = Self::new();
        slot.state.borrow_mut().value = Some(bytes.to_vec());
        slot
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.state.borrow().value.clone()
    }

    /// Simulates a full or disabled storage backend.
    pub fn reject_writes(&self, reject: bool) {
        self.state.borrow_mut().reject_writes = reject;
    }

    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }
}

impl SnapshotSlot for MemorySlot {
    fn key(&self) -> &str {
        STORAGE_KEY
    }

    fn read(&self) -> KanbanResult<Option<Vec<u8>>> {
        Ok(self.contents())
    }

    fn write(&mut self, bytes: &[u8]) -> KanbanResult<()> {
        let mut state = self.state.borrow_mut();
        if state.reject_writes {
            return Err(KanbanError::storage(
                STORAGE_KEY,
                std::io::Error::new(std::io::ErrorKind::Other, "storage quota exceeded"),
            ));
        }
        state.value = Some(bytes.to_vec());
        state.writes += 1;
        Ok(())
    }
}
