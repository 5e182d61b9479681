use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::io;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Redraw,
}

/// Blocks until the next key press or resize.
///
/// Release and repeat events are skipped so each key acts once on every
/// platform.
pub fn next_event() -> io::Result<Event> {
    loop {
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(Event::Key(key))
            }
            CrosstermEvent::Resize(_, _) => return Ok(Event::Redraw),
            _ => {}
        }
    }
}

/// Blocks until the next key press, ignoring everything else.
pub fn next_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = next_event()? {
            return Ok(key);
        }
    }
}
