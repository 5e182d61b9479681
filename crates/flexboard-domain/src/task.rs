use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::column::{Column, Direction};

/// Opaque task identifier. Any string loaded from a snapshot is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(rename = "desc", default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub column: Column,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created: DateTime<Utc>,
}

impl Task {
    /// Builds a `Todo` task created now. Returns `None` when the trimmed
    /// title is empty.
    pub fn new(title: &str, description: &str) -> Option<Self> {
        Self::with_created(title, description, Column::Todo, Utc::now())
    }

    /// `created` is truncated to whole milliseconds, the snapshot precision.
    pub fn with_created(
        title: &str,
        description: &str,
        column: Column,
        created: DateTime<Utc>,
    ) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            id: TaskId::generate(),
            title: title.to_string(),
            description: description.trim().to_string(),
            column,
            created: created.trunc_subsecs(3),
        })
    }

    /// Stores the trimmed title. An empty result is allowed here.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.trim().to_string();
    }

    pub fn step(&mut self, direction: Direction) {
        self.column = self.column.step(direction);
    }

    pub fn toggle_done(&mut self) {
        self.column = self.column.toggled();
    }

    pub fn is_done(&self) -> bool {
        self.column == Column::Done
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_trims_and_defaults_to_todo() {
        let task = Task::new("  Buy tiles  ", "").unwrap();
        assert_eq!(task.title, "Buy tiles");
        assert_eq!(task.description, "");
        assert_eq!(task.column, Column::Todo);
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(Task::new("", "").is_none());
        assert!(Task::new(" \t\n", "desc").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("a", "").unwrap();
        let b = Task::new("a", "").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_set_title_allows_empty() {
        let mut task = Task::new("Keep", "").unwrap();
        task.set_title("   ");
        assert_eq!(task.title, "");
    }

    #[test]
    fn test_wire_format() {
        let created = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let mut task = Task::with_created("Tile", "floor", Column::InProgress, created).unwrap();
        task.id = TaskId::from("k3j9x2a");

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "k3j9x2a",
                "title": "Tile",
                "desc": "floor",
                "column": "inprogress",
                "created": 1_700_000_000_123_i64,
            })
        );
    }

    #[test]
    fn test_missing_or_null_desc_loads_empty() {
        let missing: Task = serde_json::from_value(json!({
            "id": "a1", "title": "t", "column": "todo", "created": 0
        }))
        .unwrap();
        assert_eq!(missing.description, "");

        let null: Task = serde_json::from_value(json!({
            "id": "a2", "title": "t", "desc": null, "column": "done", "created": 0
        }))
        .unwrap();
        assert_eq!(null.description, "");
        assert!(null.is_done());
    }

    #[test]
    fn test_created_truncated_to_millis() {
        let created = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let task = Task::with_created("t", "", Column::Todo, created).unwrap();
        assert_eq!(task.created.timestamp_subsec_nanos(), 123_000_000);
    }
}
