use flexboard_core::KanbanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::task::Task;

/// The three fixed board columns, ordered left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    /// Saturates at `Todo`.
    pub fn left(self) -> Self {
        match self {
            Column::Todo | Column::InProgress => Column::Todo,
            Column::Done => Column::InProgress,
        }
    }

    /// Saturates at `Done`.
    pub fn right(self) -> Self {
        match self {
            Column::Todo => Column::InProgress,
            Column::InProgress | Column::Done => Column::Done,
        }
    }

    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// `Done` goes back to `Todo`; anything else jumps straight to `Done`.
    pub fn toggled(self) -> Self {
        match self {
            Column::Done => Column::Todo,
            Column::Todo | Column::InProgress => Column::Done,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Column::Todo => 0,
            Column::InProgress => 1,
            Column::Done => 2,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Column::Todo => "todo",
            Column::InProgress => "inprogress",
            Column::Done => "done",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Todo => "To do",
            Column::InProgress => "In progress",
            Column::Done => "Done",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.key() == s)
            .ok_or_else(|| KanbanError::Validation(format!("unknown column '{}'", s)))
    }
}

impl FromStr for Direction {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(KanbanError::Validation(format!(
                "unknown direction '{}', expected left or right",
                other
            ))),
        }
    }
}

/// Per-column totals over an entire, unfiltered task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCounts {
    pub todo: usize,
    pub inprogress: usize,
    pub done: usize,
}

impl ColumnCounts {
    pub fn tally(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut counts, task| {
            *counts.slot_mut(task.column) += 1;
            counts
        })
    }

    pub fn get(&self, column: Column) -> usize {
        match column {
            Column::Todo => self.todo,
            Column::InProgress => self.inprogress,
            Column::Done => self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.todo + self.inprogress + self.done
    }

    fn slot_mut(&mut self, column: Column) -> &mut usize {
        match column {
            Column::Todo => &mut self.todo,
            Column::InProgress => &mut self.inprogress,
            Column::Done => &mut self.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        assert_eq!(Column::Todo.left(), Column::Todo);
        assert_eq!(Column::InProgress.left(), Column::Todo);
        assert_eq!(Column::Done.left(), Column::InProgress);

        assert_eq!(Column::Todo.right(), Column::InProgress);
        assert_eq!(Column::InProgress.right(), Column::Done);
        assert_eq!(Column::Done.right(), Column::Done);
    }

    #[test]
    fn test_boundaries_are_idempotent() {
        assert_eq!(Column::Todo.left().left(), Column::Todo);
        assert_eq!(Column::Done.right().right(), Column::Done);
    }

    #[test]
    fn test_toggle_does_not_round_trip_from_in_progress() {
        assert_eq!(Column::InProgress.toggled(), Column::Done);
        assert_eq!(Column::InProgress.toggled().toggled(), Column::Todo);
        assert_eq!(Column::Todo.toggled().toggled(), Column::Todo);
    }

    #[test]
    fn test_step_matches_left_right() {
        for column in Column::ALL {
            assert_eq!(column.step(Direction::Left), column.left());
            assert_eq!(column.step(Direction::Right), column.right());
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Column::InProgress).unwrap(), "\"inprogress\"");
        let parsed: Column = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(parsed, Column::Done);
        assert!(serde_json::from_str::<Column>("\"blocked\"").is_err());
    }

    #[test]
    fn test_parse_column_and_direction() {
        assert_eq!("inprogress".parse::<Column>().unwrap(), Column::InProgress);
        assert!("doing".parse::<Column>().is_err());
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_tally() {
        let mut tasks = vec![
            Task::new("a", "").unwrap(),
            Task::new("b", "").unwrap(),
            Task::new("c", "").unwrap(),
        ];
        tasks[1].column = Column::Done;

        let counts = ColumnCounts::tally(&tasks);
        assert_eq!(counts.get(Column::Todo), 2);
        assert_eq!(counts.get(Column::InProgress), 0);
        assert_eq!(counts.get(Column::Done), 1);
        assert_eq!(counts.total(), 3);
    }
}
