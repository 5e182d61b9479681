use crate::dialog::{handle_dialog_input, DialogAction};
use crate::events::next_key;
use crate::popup::{render_confirm_popup, render_input_popup};
use crate::prompter::{Confirmation, EditOutcome, Prompter};
use crate::ui;
use crate::view::Screen;
use crossterm::event::KeyCode;
use flexboard_core::InputState;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Modal prompts drawn over the last board frame. Each call runs its own
/// key loop and returns once the user answers.
///
/// Terminal failures during a prompt count as a cancellation.
pub struct TerminalPrompter<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    backdrop: &'a Screen,
}

impl<'a, B: Backend> TerminalPrompter<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, backdrop: &'a Screen) -> Self {
        Self { terminal, backdrop }
    }

    fn confirm_loop(&mut self, message: &str) -> io::Result<Confirmation> {
        let backdrop = self.backdrop;
        loop {
            self.terminal.draw(|frame| {
                ui::render(frame, backdrop);
                render_confirm_popup(frame, message);
            })?;
            match next_key()?.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    return Ok(Confirmation::Confirmed)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    return Ok(Confirmation::Cancelled)
                }
                _ => {}
            }
        }
    }

    fn edit_loop(&mut self, message: &str, initial: &str) -> io::Result<EditOutcome> {
        let backdrop = self.backdrop;
        let mut input = InputState::with_text(initial);
        loop {
            let text = input.text();
            let cursor = input.cursor();
            self.terminal.draw(|frame| {
                ui::render(frame, backdrop);
                render_input_popup(frame, "Edit", message, &text, cursor);
            })?;
            match handle_dialog_input(&mut input, next_key()?.code) {
                DialogAction::Confirm => return Ok(EditOutcome::Edited(input.text())),
                DialogAction::Cancel => return Ok(EditOutcome::Cancelled),
                DialogAction::None => {}
            }
        }
    }
}

impl<B: Backend> Prompter for TerminalPrompter<'_, B> {
    fn confirm(&mut self, message: &str) -> Confirmation {
        self.confirm_loop(message).unwrap_or_else(|e| {
            tracing::error!("Confirmation prompt failed: {}", e);
            Confirmation::Cancelled
        })
    }

    fn edit_text(&mut self, message: &str, initial: &str) -> EditOutcome {
        self.edit_loop(message, initial).unwrap_or_else(|e| {
            tracing::error!("Edit prompt failed: {}", e);
            EditOutcome::Cancelled
        })
    }
}
