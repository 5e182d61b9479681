use chrono::{DateTime, Duration, Utc};

use crate::column::Column;
use crate::task::Task;

const EXAMPLES: [(&str, &str, Column, i64); 3] = [
    (
        "Remove old shower taps",
        "Prepare the wall and cap pipes",
        Column::Todo,
        60,
    ),
    (
        "Order Villaboard sheets",
        "3 sheets 1200x3600",
        Column::InProgress,
        30,
    ),
    (
        "Tile shower floor",
        "Use 600x600 grid, slope 1:80",
        Column::Done,
        8 * 60,
    ),
];

/// Demonstration tasks, one per column, each created a fixed number of
/// minutes before `now`.
pub fn example_tasks(now: DateTime<Utc>) -> Vec<Task> {
    EXAMPLES
        .iter()
        .filter_map(|(title, description, column, minutes_ago)| {
            Task::with_created(
                title,
                description,
                *column,
                now - Duration::minutes(*minutes_ago),
            )
        })
        .collect()
}
