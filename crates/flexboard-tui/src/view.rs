//! Pure projection of the task list into what the board draws.

use chrono::{DateTime, Local, Utc};
use flexboard_domain::{Column, ColumnCounts, Filter, Task, TaskId};
use std::fmt::Write;

use crate::app::AppMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub created_label: String,
    /// State of the toggle control.
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub column: Column,
    pub cards: Vec<CardView>,
}

/// One full rebuild of the board for a given filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub filter: Filter,
    /// Unfiltered totals, independent of `filter`.
    pub counts: ColumnCounts,
    pub columns: [ColumnView; 3],
}

impl BoardView {
    /// Places every task the filter accepts into its home column, keeping
    /// store order within each column.
    pub fn project(tasks: &[Task], filter: Filter, timestamp_format: &str) -> Self {
        let mut columns = Column::ALL.map(|column| ColumnView {
            column,
            cards: Vec::new(),
        });
        for task in filter.apply(tasks) {
            columns[task.column.index()]
                .cards
                .push(CardView::from_task(task, timestamp_format));
        }
        Self {
            filter,
            counts: ColumnCounts::tally(tasks),
            columns,
        }
    }

    pub fn column(&self, column: Column) -> &ColumnView {
        &self.columns[column.index()]
    }

    pub fn visible_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }
}

impl CardView {
    pub fn from_task(task: &Task, timestamp_format: &str) -> Self {
        Self {
            id: task.id.clone(),
            title: escape_text(&task.title),
            description: escape_text(&task.description),
            created_label: format_created(task.created, timestamp_format),
            done: task.is_done(),
        }
    }
}

/// Renders control characters and bidi overrides as visible escapes so
/// task text cannot inject terminal sequences.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() || is_bidi_control(c) {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}

/// Local time in `format`, falling back to RFC 3339 when the format string
/// is invalid.
pub fn format_created(created: DateTime<Utc>, format: &str) -> String {
    let local = created.with_timezone(&Local);
    let mut label = String::new();
    if write!(label, "{}", local.format(format)).is_err() {
        return local.to_rfc3339();
    }
    label
}

/// Everything the ui draws for one frame: the board plus its chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub board: BoardView,
    pub mode: AppMode,
    pub input: String,
    pub input_cursor: usize,
    pub focus: Column,
    /// Selected card index per column.
    pub selected: [Option<usize>; 3],
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, column: Column) -> Task {
        let mut task = Task::new(title, "").unwrap();
        task.column = column;
        task
    }

    fn titles(view: &BoardView, column: Column) -> Vec<&str> {
        view.column(column)
            .cards
            .iter()
            .map(|c| c.title.as_str())
            .collect()
    }

    #[test]
    fn test_project_all_places_tasks_in_home_columns() {
        let tasks = vec![
            task("a", Column::Done),
            task("b", Column::Todo),
            task("c", Column::Todo),
            task("d", Column::InProgress),
        ];
        let view = BoardView::project(&tasks, Filter::All, "%Y");

        assert_eq!(titles(&view, Column::Todo), vec!["b", "c"]);
        assert_eq!(titles(&view, Column::InProgress), vec!["d"]);
        assert_eq!(titles(&view, Column::Done), vec!["a"]);
        assert!(view.column(Column::Done).cards[0].done);
        assert!(!view.column(Column::Todo).cards[0].done);
    }

    #[test]
    fn test_todo_filter_hides_done_column() {
        let tasks = vec![
            task("a", Column::Done),
            task("b", Column::Todo),
            task("d", Column::InProgress),
        ];
        let view = BoardView::project(&tasks, Filter::Todo, "%Y");

        assert_eq!(titles(&view, Column::Todo), vec!["b"]);
        assert_eq!(titles(&view, Column::InProgress), vec!["d"]);
        assert!(view.column(Column::Done).cards.is_empty());
    }

    #[test]
    fn test_counts_are_unfiltered() {
        let tasks = vec![
            task("a", Column::Done),
            task("b", Column::Todo),
            task("c", Column::InProgress),
        ];
        let view = BoardView::project(&tasks, Filter::Done, "%Y");

        assert_eq!(view.visible_count(), 1);
        assert_eq!(view.counts.total(), 3);
        assert_eq!(view.counts.todo, 1);
        assert_eq!(view.counts.inprogress, 1);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain <b>&</b>"), "plain <b>&</b>");
        assert_eq!(escape_text("red\u{1b}[31m"), "red\\u{1b}[31m");
        assert_eq!(escape_text("a\nb\tc"), "a\\nb\\tc");
        assert_eq!(escape_text("evil\u{202E}txt"), "evil\\u{202e}txt");
        assert_eq!(escape_text("tâche ✓"), "tâche ✓");
    }

    #[test]
    fn test_card_text_is_escaped() {
        let mut t = task("bell\u{7}", Column::Todo);
        t.description = "clear\u{1b}[2J".to_string();
        let card = CardView::from_task(&t, "%Y");
        assert_eq!(card.title, "bell\\u{7}");
        assert_eq!(card.description, "clear\\u{1b}[2J");
    }

    #[test]
    fn test_invalid_timestamp_format_falls_back() {
        let created = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let label = format_created(created, "%Q");
        assert!(label.contains('T'));
        assert_eq!(format_created(created, "%Y"), "2023");
    }
}
