//! Display-only predicates over the task list.

use flexboard_core::KanbanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::column::Column;
use crate::task::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    /// Everything not yet done: `Todo` and `InProgress`.
    Todo,
    Done,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Todo, Filter::Done];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Todo => task.column != Column::Done,
            Filter::Done => task.column == Column::Done,
        }
    }

    pub fn apply(self, tasks: &[Task]) -> impl Iterator<Item = &Task> {
        tasks.iter().filter(move |task| self.matches(task))
    }

    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Todo,
            Filter::Todo => Filter::Done,
            Filter::Done => Filter::All,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Todo => "todo",
            Filter::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Todo => "Not done",
            Filter::Done => "Done",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Filter {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.key() == s)
            .ok_or_else(|| {
                KanbanError::Validation(format!(
                    "unknown filter '{}', expected all, todo or done",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_in(column: Column) -> Task {
        let mut task = Task::new("t", "").unwrap();
        task.column = column;
        task
    }

    #[test]
    fn test_all_accepts_everything() {
        for column in Column::ALL {
            assert!(Filter::All.matches(&task_in(column)));
        }
    }

    #[test]
    fn test_todo_means_not_done() {
        assert!(Filter::Todo.matches(&task_in(Column::Todo)));
        assert!(Filter::Todo.matches(&task_in(Column::InProgress)));
        assert!(!Filter::Todo.matches(&task_in(Column::Done)));
    }

    #[test]
    fn test_done_only_done() {
        assert!(!Filter::Done.matches(&task_in(Column::Todo)));
        assert!(!Filter::Done.matches(&task_in(Column::InProgress)));
        assert!(Filter::Done.matches(&task_in(Column::Done)));
    }

    #[test]
    fn test_apply_preserves_order() {
        let tasks = vec![
            task_in(Column::Done),
            task_in(Column::Todo),
            task_in(Column::Done),
        ];
        let ids: Vec<_> = Filter::Done.apply(&tasks).map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![tasks[0].id.clone(), tasks[2].id.clone()]);
    }

    #[test]
    fn test_cycle_and_parse() {
        assert_eq!(Filter::All.next().next().next(), Filter::All);
        assert_eq!("done".parse::<Filter>().unwrap(), Filter::Done);
        assert!("inprogress".parse::<Filter>().is_err());
        assert_eq!(Filter::default(), Filter::All);
    }
}
