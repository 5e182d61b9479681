use flexboard_core::KanbanResult;

/// Storage key of the task snapshot. The format version lives in the key:
/// a format change means a new key.
pub const STORAGE_KEY: &str = "flexboard.tasks.v1";

/// A single named key-value slot holding one serialized snapshot.
///
/// Writes replace the whole value; there are no partial updates.
pub trait SnapshotSlot {
    /// Name of the slot
    fn key(&self) -> &str;

    /// Read the stored value, `None` when nothing has been written yet
    fn read(&self) -> KanbanResult<Option<Vec<u8>>>;

    /// Overwrite the stored value
    fn write(&mut self, bytes: &[u8]) -> KanbanResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T> {
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T>;
}
