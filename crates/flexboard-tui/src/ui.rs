use crate::app::AppMode;
use crate::keybindings::{INPUT_HINTS, NORMAL_HINTS};
use crate::theme::*;
use crate::view::{CardView, ColumnView, Screen};
use flexboard_domain::Filter;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Card action affordances: move-left, edit, delete, move-right.
pub const CARD_ACTIONS: &str = "◀ h  ✎ e  ✗ d  ▶ l";

pub fn render(frame: &mut Frame, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, screen, chunks[0]);
    render_columns(frame, screen, chunks[1]);
    render_footer(frame, screen, chunks[2]);
}

fn render_header(frame: &mut Frame, screen: &Screen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(0)])
        .split(area);

    let chips: Vec<Span> = Filter::ALL
        .iter()
        .flat_map(|filter| {
            let style = if *filter == screen.board.filter {
                active_chip()
            } else {
                label_text()
            };
            [Span::styled(format!(" {} ", filter.label()), style), Span::raw(" ")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(chips))
            .block(Block::default().title("Filter").borders(Borders::ALL)),
        chunks[0],
    );

    let editing = screen.mode == AppMode::Input;
    let border = if editing {
        focused_border()
    } else {
        unfocused_border()
    };
    let input_block = Block::default()
        .title("New task")
        .borders(Borders::ALL)
        .border_style(border);
    let input_area = input_block.inner(chunks[1]);
    frame.render_widget(
        Paragraph::new(screen.input.as_str())
            .style(normal_text())
            .block(input_block),
        chunks[1],
    );
    if editing {
        frame.set_cursor_position((input_area.x + screen.input_cursor as u16, input_area.y));
    }
}

fn render_columns(frame: &mut Frame, screen: &Screen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (i, column_view) in screen.board.columns.iter().enumerate() {
        let focused = screen.mode == AppMode::Normal && screen.focus == column_view.column;
        render_column(frame, screen, column_view, focused, screen.selected[i], chunks[i]);
    }
}

fn render_column(
    frame: &mut Frame,
    screen: &Screen,
    column_view: &ColumnView,
    focused: bool,
    selected: Option<usize>,
    area: Rect,
) {
    let count = screen.board.counts.get(column_view.column);
    let title = format!("{} ({})", column_view.column.title(), count);
    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };

    let items: Vec<ListItem> = column_view
        .cards
        .iter()
        .enumerate()
        .map(|(idx, card)| card_item(card, focused && selected == Some(idx)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border),
        )
        .highlight_style(selected_card(focused));

    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_item(card: &CardView, show_actions: bool) -> ListItem<'static> {
    let checkbox = if card.done { "[x] " } else { "[ ] " };
    let title_style = if card.done {
        done_text()
    } else {
        normal_text()
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(checkbox, highlight_text()),
        Span::styled(card.title.clone(), title_style),
    ])];
    if !card.description.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("    {}", card.description),
            label_text(),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("    {}", card.created_label),
        label_text(),
    )));
    if show_actions {
        lines.push(Line::from(Span::styled(
            format!("    {}", CARD_ACTIONS),
            highlight_text(),
        )));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn render_footer(frame: &mut Frame, screen: &Screen, area: Rect) {
    let line = match &screen.status {
        Some(warning) => Line::from(Span::styled(warning.clone(), warning_text())),
        None => {
            let hints = match screen.mode {
                AppMode::Normal => NORMAL_HINTS,
                AppMode::Input => INPUT_HINTS,
            };
            Line::from(Span::styled(hints, label_text()))
        }
    };
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}
