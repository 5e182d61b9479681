pub mod app;
pub mod dialog;
pub mod events;
pub mod keybindings;
pub mod popup;
pub mod prompter;
pub mod selection;
pub mod terminal_prompter;
pub mod theme;
pub mod ui;
pub mod view;

pub use app::{App, AppMode};
pub use prompter::{Confirmation, EditOutcome, Prompter};
pub use view::{BoardView, CardView, ColumnView, Screen};
