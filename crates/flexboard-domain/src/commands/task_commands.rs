use super::{Command, CommandContext};
use crate::{Direction, Task, TaskId};
use flexboard_core::KanbanResult;

/// Prepend a new task.
pub struct CreateTask {
    pub task: Task,
}

impl Command for CreateTask {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.tasks.insert(0, self.task.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create task: '{}'", self.task.title)
    }
}

/// Replace a task title with its trimmed value.
pub struct UpdateTaskTitle {
    pub task_id: TaskId,
    pub title: String,
}

impl Command for UpdateTaskTitle {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        if let Some(task) = context.find_mut(&self.task_id) {
            task.set_title(&self.title);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Rename task {} to '{}'", self.task_id, self.title.trim())
    }
}

pub struct DeleteTask {
    pub task_id: TaskId,
}

impl Command for DeleteTask {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.tasks.retain(|t| t.id != self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}

/// Step a task one column left or right, saturating at the ends.
pub struct MoveTask {
    pub task_id: TaskId,
    pub direction: Direction,
}

impl Command for MoveTask {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        if let Some(task) = context.find_mut(&self.task_id) {
            task.step(self.direction);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move task {} {:?}", self.task_id, self.direction)
    }
}

pub struct ToggleDone {
    pub task_id: TaskId,
}

impl Command for ToggleDone {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        if let Some(task) = context.find_mut(&self.task_id) {
            task.toggle_done();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle done on task {}", self.task_id)
    }
}

/// Prepend example tasks as a block, keeping their order.
pub struct SeedExamples {
    pub examples: Vec<Task>,
}

impl Command for SeedExamples {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.tasks.splice(0..0, self.examples.iter().cloned());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Seed {} example tasks", self.examples.len())
    }
}

pub struct ClearTasks;

impl Command for ClearTasks {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.tasks.clear();
        Ok(())
    }

    fn description(&self) -> String {
        "Clear all tasks".to_string()
    }
}
