use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.mode == Mode::Query;
    let border_color = if focused {
        app.theme.active_panel()
    } else {
        app.theme.border()
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let content = if app.query_input.is_empty() && !focused {
        Line::from(Span::styled(
            "Search for books, authors, ISBN, or subjects (press / to type)",
            Style::default().fg(app.theme.muted()),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                app.query_input.clone(),
                Style::default().fg(app.theme.fg_bright()),
            ),
            Span::styled(
                "  Enter: search  Tab: advanced",
                Style::default()
                    .fg(app.theme.muted())
                    .add_modifier(Modifier::DIM),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused {
        frame.set_cursor_position(Position::new(
            inner.x + app.query_input.len() as u16,
            inner.y,
        ));
    }
}
