use crate::{
    dialog::{handle_dialog_input, DialogAction},
    events::{next_event, Event},
    keybindings::{action_for, Action},
    prompter::{Confirmation, EditOutcome, Prompter},
    selection::SelectionState,
    terminal_prompter::TerminalPrompter,
    ui,
    view::{BoardView, Screen},
};
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flexboard_core::{InputState, KanbanError, KanbanResult};
use flexboard_domain::{Column, Direction, Filter, Task, TaskId};
use flexboard_persistence::TaskStore;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Keys act on the board.
    Normal,
    /// Keys edit the "new task" field.
    Input,
}

/// Application controller: owns the store and the view state, and turns
/// key presses into store operations.
pub struct App {
    pub store: TaskStore,
    pub filter: Filter,
    pub mode: AppMode,
    pub input: InputState,
    pub focus: Column,
    pub status: Option<String>,
    pub should_quit: bool,
    selections: [SelectionState; 3],
    timestamp_format: String,
}

impl App {
    pub fn new(store: TaskStore, filter: Filter, timestamp_format: impl Into<String>) -> Self {
        let mut app = Self {
            store,
            filter,
            mode: AppMode::Normal,
            input: InputState::new(),
            focus: Column::Todo,
            status: None,
            should_quit: false,
            selections: Default::default(),
            timestamp_format: timestamp_format.into(),
        };
        app.clamp_selections();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn board(&self) -> BoardView {
        BoardView::project(self.store.tasks(), self.filter, &self.timestamp_format)
    }

    pub fn screen(&self) -> Screen {
        Screen {
            board: self.board(),
            mode: self.mode,
            input: self.input.text(),
            input_cursor: self.input.cursor(),
            focus: self.focus,
            selected: [
                self.selections[0].get(),
                self.selections[1].get(),
                self.selections[2].get(),
            ],
            status: self.status.clone(),
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selections[self.focus.index()].get()
    }

    /// The task under the cursor in the focused column, if any.
    pub fn selected_task_id(&self) -> Option<TaskId> {
        let idx = self.selected_index()?;
        self.visible_ids(self.focus).into_iter().nth(idx)
    }

    pub fn handle_key(&mut self, key: KeyEvent, prompter: &mut dyn Prompter) {
        match self.mode {
            AppMode::Input => self.handle_input_key(key),
            AppMode::Normal => {
                if let Some(action) = action_for(&key) {
                    self.perform(action, prompter);
                }
            }
        }
    }

    pub fn perform(&mut self, action: Action, prompter: &mut dyn Prompter) {
        match action {
            Action::Quit => self.quit(),
            Action::FocusInput => self.mode = AppMode::Input,
            Action::MoveTask(direction) => self.move_selected(direction),
            Action::ToggleDone => self.toggle_selected(),
            Action::EditTitle => self.edit_selected(prompter),
            Action::DeleteTask => self.delete_selected(),
            Action::SetFilter(filter) => self.set_filter(filter),
            Action::CycleFilter => self.set_filter(self.filter.next()),
            Action::Seed => {
                let result = self.store.seed().map(|_| ());
                self.finish(result);
            }
            Action::Clear => self.clear(prompter),
            Action::NextCard => {
                let len = self.visible_len(self.focus);
                self.selections[self.focus.index()].next(len);
            }
            Action::PrevCard => {
                let len = self.visible_len(self.focus);
                self.selections[self.focus.index()].prev(len);
            }
            Action::NextColumn => self.focus = self.focus.right(),
            Action::PrevColumn => self.focus = self.focus.left(),
        }
    }

    /// Filter changes re-render only; the store is untouched.
    pub fn set_filter(&mut self, filter: Filter) {
        tracing::debug!("Filter set to {}", filter);
        self.filter = filter;
        self.clamp_selections();
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match handle_dialog_input(&mut self.input, key.code) {
            DialogAction::Confirm => self.add_from_input(),
            DialogAction::Cancel => self.mode = AppMode::Normal,
            DialogAction::None => {}
        }
    }

    /// The add trigger. A blank field is ignored and keeps focus.
    fn add_from_input(&mut self) {
        let title = self.input.text();
        match self.store.create(&title, "") {
            Ok(Some(task)) => {
                tracing::info!("Created task: {} (id: {})", task.title, task.id);
                self.input.clear();
                self.status = None;
                self.follow(&task);
            }
            Ok(None) => {}
            Err(e) => {
                self.input.clear();
                self.warn(e);
            }
        }
        self.clamp_selections();
    }

    fn move_selected(&mut self, direction: Direction) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let result = self.store.move_task(&id, direction);
        self.finish_on(&id, result);
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let result = self.store.toggle_done(&id);
        self.finish_on(&id, result);
    }

    fn edit_selected(&mut self, prompter: &mut dyn Prompter) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let Some(current) = self.store.get(&id).map(|t| t.title.clone()) else {
            return;
        };
        if let EditOutcome::Edited(title) = prompter.edit_text("Edit task title", &current) {
            let result = self.store.update_title(&id, &title);
            self.finish_on(&id, result);
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let result = self.store.delete(&id).map(|_| ());
        self.finish(result);
    }

    fn clear(&mut self, prompter: &mut dyn Prompter) {
        if prompter.confirm("Clear all tasks?") == Confirmation::Cancelled {
            tracing::debug!("Clear declined");
            return;
        }
        let result = self.store.clear().map(|_| ());
        self.finish(result);
    }

    fn finish(&mut self, result: KanbanResult<()>) {
        match result {
            Ok(()) => self.status = None,
            Err(e) => self.warn(e),
        }
        self.clamp_selections();
    }

    /// Like `finish`, but focus follows the task to its column. The store
    /// keeps the change even when the save failed.
    fn finish_on(&mut self, id: &TaskId, result: KanbanResult<Option<Task>>) {
        let result = result.map(|_| ());
        if let Some(task) = self.store.get(id).cloned() {
            self.follow(&task);
        }
        self.finish(result);
    }

    fn follow(&mut self, task: &Task) {
        if let Some(idx) = self.visible_ids(task.column).iter().position(|v| v == &task.id) {
            self.focus = task.column;
            self.selections[task.column.index()].set(Some(idx));
        }
    }

    fn warn(&mut self, error: KanbanError) {
        tracing::warn!("Save failed: {}", error);
        self.status = Some(format!("Not saved: {}", error));
    }

    fn visible_ids(&self, column: Column) -> Vec<TaskId> {
        self.filter
            .apply(self.store.tasks())
            .filter(|t| t.column == column)
            .map(|t| t.id.clone())
            .collect()
    }

    fn visible_len(&self, column: Column) -> usize {
        self.filter
            .apply(self.store.tasks())
            .filter(|t| t.column == column)
            .count()
    }

    fn clamp_selections(&mut self) {
        for column in Column::ALL {
            let len = self.visible_len(column);
            self.selections[column.index()].clamp(len);
        }
    }

    pub fn run(&mut self) -> KanbanResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> KanbanResult<()> {
        while !self.should_quit {
            let screen = self.screen();
            terminal.draw(|frame| ui::render(frame, &screen))?;

            match next_event()? {
                Event::Key(key) => {
                    let mut prompter = TerminalPrompter::new(&mut *terminal, &screen);
                    self.handle_key(key, &mut prompter);
                }
                Event::Redraw => {}
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
