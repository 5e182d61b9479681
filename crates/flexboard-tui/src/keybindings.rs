use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flexboard_domain::{Direction, Filter};

/// What a key press on the board asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusInput,
    MoveTask(Direction),
    ToggleDone,
    EditTitle,
    DeleteTask,
    SetFilter(Filter),
    CycleFilter,
    Seed,
    Clear,
    NextCard,
    PrevCard,
    NextColumn,
    PrevColumn,
    Quit,
}

pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('a') | KeyCode::Char('i') => Action::FocusInput,
        KeyCode::Char('h') | KeyCode::Char('<') => Action::MoveTask(Direction::Left),
        KeyCode::Char('l') | KeyCode::Char('>') => Action::MoveTask(Direction::Right),
        KeyCode::Char(' ') | KeyCode::Char('x') => Action::ToggleDone,
        KeyCode::Char('e') | KeyCode::Enter => Action::EditTitle,
        KeyCode::Char('d') | KeyCode::Delete => Action::DeleteTask,
        KeyCode::Char('1') => Action::SetFilter(Filter::All),
        KeyCode::Char('2') => Action::SetFilter(Filter::Todo),
        KeyCode::Char('3') => Action::SetFilter(Filter::Done),
        KeyCode::Char('f') => Action::CycleFilter,
        KeyCode::Char('s') => Action::Seed,
        KeyCode::Char('C') => Action::Clear,
        KeyCode::Char('j') | KeyCode::Down => Action::NextCard,
        KeyCode::Char('k') | KeyCode::Up => Action::PrevCard,
        KeyCode::Tab | KeyCode::Right => Action::NextColumn,
        KeyCode::BackTab | KeyCode::Left => Action::PrevColumn,
        _ => return None,
    };
    Some(action)
}

/// Footer hint for the board in normal mode.
pub const NORMAL_HINTS: &str = "a add  h/l move  space done  e edit  d delete  1/2/3 filter  s seed  C clear  q quit";

/// Footer hint while the input field has focus.
pub const INPUT_HINTS: &str = "Enter add  Esc leave field";

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_card_actions() {
        assert_eq!(
            action_for(&key(KeyCode::Char('h'))),
            Some(Action::MoveTask(Direction::Left))
        );
        assert_eq!(
            action_for(&key(KeyCode::Char('>'))),
            Some(Action::MoveTask(Direction::Right))
        );
        assert_eq!(action_for(&key(KeyCode::Enter)), Some(Action::EditTitle));
        assert_eq!(action_for(&key(KeyCode::Char(' '))), Some(Action::ToggleDone));
    }

    #[test]
    fn test_filter_keys() {
        assert_eq!(
            action_for(&key(KeyCode::Char('2'))),
            Some(Action::SetFilter(Filter::Todo))
        );
        assert_eq!(action_for(&key(KeyCode::Char('f'))), Some(Action::CycleFilter));
    }

    #[test]
    fn test_clear_needs_shift() {
        assert_eq!(action_for(&key(KeyCode::Char('c'))), None);
        assert_eq!(
            action_for(&KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            Some(Action::Clear)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        assert_eq!(
            action_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }
}
