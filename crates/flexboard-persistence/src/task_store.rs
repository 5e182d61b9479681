use crate::serialization::JsonSerializer;
use crate::traits::{Serializer, SnapshotSlot};
use chrono::Utc;
use flexboard_core::KanbanResult;
use flexboard_domain::commands::{
    ClearTasks, Command, CommandContext, CreateTask, DeleteTask, MoveTask, SeedExamples,
    ToggleDone, UpdateTaskTitle,
};
use flexboard_domain::{example_tasks, ColumnCounts, Direction, Task, TaskId};
use std::collections::HashSet;

/// Owns the ordered task list and keeps its snapshot slot in sync.
///
/// # Save Behavior
///
/// Every mutating operation runs one domain command and then rewrites the
/// whole snapshot before returning. When the write fails the in-memory
/// change stays applied and the storage error is returned; the next
/// successful save brings the slot back in line.
///
/// Operations addressing an unknown id do nothing and return `Ok(None)`
/// without touching the slot.
pub struct TaskStore {
    tasks: Vec<Task>,
    counts: ColumnCounts,
    slot: Box<dyn SnapshotSlot>,
    serializer: JsonSerializer,
}

impl TaskStore {
    /// Open a store over `slot`, loading whatever snapshot it holds.
    pub fn open(slot: impl SnapshotSlot + 'static) -> Self {
        let serializer = JsonSerializer;
        let tasks = Self::load(&slot, &serializer);
        tracing::info!(
            "Opened task store '{}' with {} tasks",
            slot.key(),
            tasks.len()
        );
        Self {
            counts: ColumnCounts::tally(&tasks),
            tasks,
            slot: Box::new(slot),
            serializer,
        }
    }

    /// Read the snapshot. Missing, unreadable or corrupt data all yield an
    /// empty list.
    pub fn load(slot: &dyn SnapshotSlot, serializer: &JsonSerializer) -> Vec<Task> {
        let bytes = match slot.read() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read slot '{}', starting empty: {}", slot.key(), e);
                return Vec::new();
            }
        };

        match Serializer::<Vec<Task>>::deserialize(serializer, &bytes) {
            Ok(tasks) => dedupe_ids(tasks),
            Err(e) => {
                tracing::warn!(
                    "Discarding corrupt snapshot in slot '{}' ({} bytes): {}",
                    slot.key(),
                    bytes.len(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Recount the columns and overwrite the snapshot with the full list.
    pub fn save(&mut self) -> KanbanResult<()> {
        self.counts = ColumnCounts::tally(&self.tasks);
        let bytes = self.serializer.serialize(&self.tasks)?;
        if let Err(e) = self.slot.write(&bytes) {
            tracing::warn!("Failed to save {} tasks: {}", self.tasks.len(), e);
            return Err(e);
        }
        tracing::debug!("Saved {} tasks ({} bytes)", self.tasks.len(), bytes.len());
        Ok(())
    }

    /// Run a command against the list, then save.
    pub fn execute(&mut self, command: Box<dyn Command>) -> KanbanResult<()> {
        tracing::debug!("Executing: {}", command.description());
        let mut context = CommandContext {
            tasks: &mut self.tasks,
        };
        command.execute(&mut context)?;
        self.save()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Totals as of the last save, over the whole unfiltered list.
    pub fn counts(&self) -> ColumnCounts {
        self.counts
    }

    pub fn slot_key(&self) -> &str {
        self.slot.key()
    }

    /// Prepend a new `Todo` task. A blank title is rejected silently:
    /// nothing changes and `Ok(None)` comes back.
    pub fn create(&mut self, title: &str, description: &str) -> KanbanResult<Option<Task>> {
        let Some(task) = Task::new(title, description) else {
            tracing::debug!("Ignoring task with blank title");
            return Ok(None);
        };
        self.execute(Box::new(CreateTask { task: task.clone() }))?;
        Ok(Some(task))
    }

    /// Set the trimmed title, even when that leaves it empty.
    pub fn update_title(&mut self, id: &TaskId, title: &str) -> KanbanResult<Option<Task>> {
        self.execute_on(
            id,
            Box::new(UpdateTaskTitle {
                task_id: id.clone(),
                title: title.to_string(),
            }),
        )
    }

    /// Returns the removed task.
    pub fn delete(&mut self, id: &TaskId) -> KanbanResult<Option<Task>> {
        let Some(task) = self.get(id).cloned() else {
            tracing::debug!("Delete ignored, no task {}", id);
            return Ok(None);
        };
        self.execute(Box::new(DeleteTask {
            task_id: id.clone(),
        }))?;
        Ok(Some(task))
    }

    pub fn move_task(&mut self, id: &TaskId, direction: Direction) -> KanbanResult<Option<Task>> {
        self.execute_on(
            id,
            Box::new(MoveTask {
                task_id: id.clone(),
                direction,
            }),
        )
    }

    pub fn toggle_done(&mut self, id: &TaskId) -> KanbanResult<Option<Task>> {
        self.execute_on(
            id,
            Box::new(ToggleDone {
                task_id: id.clone(),
            }),
        )
    }

    /// Prepend the example tasks and return them.
    pub fn seed(&mut self) -> KanbanResult<Vec<Task>> {
        let examples = example_tasks(Utc::now());
        tracing::info!("Seeding {} example tasks", examples.len());
        self.execute(Box::new(SeedExamples {
            examples: examples.clone(),
        }))?;
        Ok(examples)
    }

    /// Remove every task. Callers confirm with the user first.
    pub fn clear(&mut self) -> KanbanResult<usize> {
        let removed = self.tasks.len();
        self.execute(Box::new(ClearTasks))?;
        Ok(removed)
    }

    fn execute_on(&mut self, id: &TaskId, command: Box<dyn Command>) -> KanbanResult<Option<Task>> {
        if self.get(id).is_none() {
            tracing::debug!("{} ignored, no task {}", command.description(), id);
            return Ok(None);
        }
        self.execute(command)?;
        Ok(self.get(id).cloned())
    }
}

/// Keeps the first task for each id.
fn dedupe_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let before = tasks.len();
    let unique: Vec<Task> = tasks
        .into_iter()
        .filter(|task| seen.insert(task.id.clone()))
        .collect();
    if unique.len() != before {
        tracing::warn!("Dropped {} tasks with duplicate ids", before - unique.len());
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySlot;
    use flexboard_core::KanbanError;
    use flexboard_domain::Column;

    fn store() -> (TaskStore, MemorySlot) {
        let slot = MemorySlot::new();
        (TaskStore::open(slot.clone()), slot)
    }

    fn persisted(slot: &MemorySlot) -> Vec<Task> {
        serde_json::from_slice(&slot.contents().unwrap()).unwrap()
    }

    #[test]
    fn test_open_empty_slot() {
        let (store, slot) = store();
        assert!(store.is_empty());
        assert_eq!(store.counts(), ColumnCounts::default());
        assert_eq!(slot.write_count(), 0);
    }

    #[test]
    fn test_corrupt_snapshot_loads_empty() {
        let slot = MemorySlot::with_contents(b"{not json");
        let store = TaskStore::open(slot);
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_of_wrong_shape_loads_empty() {
        let store = TaskStore::open(MemorySlot::with_contents(b"null"));
        assert!(store.is_empty());

        let store = TaskStore::open(MemorySlot::with_contents(
            br#"[{"id":"a","title":"t","column":"blocked","created":0}]"#,
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_keeps_first_of_duplicate_ids() {
        let slot = MemorySlot::with_contents(
            br#"[{"id":"a","title":"first","desc":"","column":"todo","created":0},
                 {"id":"a","title":"second","desc":"","column":"done","created":0}]"#,
        );
        let store = TaskStore::open(slot);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "first");
    }

    #[test]
    fn test_create_writes_through() {
        let (mut store, slot) = store();
        let task = store.create("Buy tiles", "").unwrap().unwrap();

        assert_eq!(persisted(&slot), vec![task]);
        assert_eq!(store.counts().todo, 1);
    }

    #[test]
    fn test_blank_create_does_not_save() {
        let (mut store, slot) = store();
        assert!(store.create("   ", "").unwrap().is_none());
        assert!(store.is_empty());
        assert_eq!(slot.write_count(), 0);
    }

    #[test]
    fn test_unknown_id_does_not_save() {
        let (mut store, slot) = store();
        store.create("a", "").unwrap();
        let ghost = TaskId::from("ghost");

        assert!(store.move_task(&ghost, Direction::Right).unwrap().is_none());
        assert!(store.toggle_done(&ghost).unwrap().is_none());
        assert!(store.update_title(&ghost, "x").unwrap().is_none());
        assert!(store.delete(&ghost).unwrap().is_none());
        assert_eq!(slot.write_count(), 1);
    }

    #[test]
    fn test_update_title_can_empty_it() {
        let (mut store, slot) = store();
        let task = store.create("Name", "").unwrap().unwrap();
        let updated = store.update_title(&task.id, "   ").unwrap().unwrap();
        assert_eq!(updated.title, "");
        assert_eq!(persisted(&slot)[0].title, "");
    }

    #[test]
    fn test_delete_returns_removed_task() {
        let (mut store, slot) = store();
        let task = store.create("Gone", "").unwrap().unwrap();
        assert_eq!(store.delete(&task.id).unwrap(), Some(task));
        assert!(persisted(&slot).is_empty());
    }

    #[test]
    fn test_clear_reports_removed_count() {
        let (mut store, slot) = store();
        store.seed().unwrap();
        assert_eq!(store.clear().unwrap(), 3);
        assert!(persisted(&slot).is_empty());
        assert_eq!(store.counts(), ColumnCounts::default());
    }

    #[test]
    fn test_save_failure_keeps_memory_change() {
        let (mut store, slot) = store();
        let task = store.create("Keep me", "").unwrap().unwrap();
        slot.reject_writes(true);

        let err = store.move_task(&task.id, Direction::Right).unwrap_err();
        assert!(matches!(err, KanbanError::Storage { .. }));
        assert_eq!(store.get(&task.id).unwrap().column, Column::InProgress);
        assert_eq!(store.counts().inprogress, 1);
        assert_eq!(persisted(&slot)[0].column, Column::Todo);

        slot.reject_writes(false);
        store.save().unwrap();
        assert_eq!(persisted(&slot)[0].column, Column::InProgress);
    }
}
