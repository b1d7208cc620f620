use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{App, FormField};
use crate::ui::centered_rect;

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Advanced Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.active_panel()))
        .style(Style::default().bg(app.theme.bg()));

    let mut lines = vec![Line::from("")];
    for field in FormField::ALL {
        let is_focused = app.form.focus == field;
        let marker = if is_focused { "> " } else { "  " };
        let label_style = if is_focused {
            Style::default()
                .fg(app.theme.frost_ice())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.muted())
        };
        let value = app.form.value(field);
        let shown = if is_focused {
            format!("{value}_")
        } else {
            value.to_string()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<11}", field.label()), label_style),
            Span::styled(shown, Style::default().fg(app.theme.fg_bright())),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Enter: search  Tab: next field  Ctrl-u: clear field  Esc: back",
        Style::default().fg(app.theme.muted()),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
