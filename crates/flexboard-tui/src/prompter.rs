//! Blocking prompts the board needs from its host.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Edited(String),
    Cancelled,
}

/// Modal yes/no and text-edit prompts. Each call blocks until the user
/// answers.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn confirm(&mut self, message: &str) -> Confirmation;

    /// `initial` pre-fills the field.
    fn edit_text(&mut self, message: &str, initial: &str) -> EditOutcome;
}
