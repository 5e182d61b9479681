use flexboard_core::KanbanResult;

pub mod task_commands;

pub use task_commands::*;

/// A mutation of the task list.
///
/// Commands only touch memory; the store persists after each one.
pub trait Command: Send + Sync {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()>;

    /// Human-readable description, used for logging.
    fn description(&self) -> String;
}

pub struct CommandContext<'a> {
    pub tasks: &'a mut Vec<crate::Task>,
}

impl CommandContext<'_> {
    pub fn find_mut(&mut self, id: &crate::TaskId) -> Option<&mut crate::Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }
}
