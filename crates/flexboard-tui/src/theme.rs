use ratatui::style::{Color, Modifier, Style};

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const ACTIVE_CHIP: Color = Color::Green;
pub const DONE_TEXT: Color = Color::DarkGray;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const POPUP_BG: Color = Color::Black;
pub const WARNING_COLOR: Color = Color::Red;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_card(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

pub fn active_chip() -> Style {
    Style::default()
        .fg(ACTIVE_CHIP)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn done_text() -> Style {
    Style::default()
        .fg(DONE_TEXT)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn warning_text() -> Style {
    Style::default()
        .fg(WARNING_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
