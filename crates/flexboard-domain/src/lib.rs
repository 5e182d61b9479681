pub mod column;
pub mod commands;
pub mod filter;
pub mod seed;
pub mod task;

pub use column::{Column, ColumnCounts, Direction};
pub use filter::Filter;
pub use seed::example_tasks;
pub use task::{Task, TaskId};
