pub mod config;
pub mod error;
pub mod input;

pub use config::AppConfig;
pub use error::{KanbanError, KanbanResult};
pub use input::InputState;
