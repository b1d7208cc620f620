use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Length(11),
            Constraint::Min(10),
        ])
        .split(area);

    render_left_zone(frame, app, chunks[0]);
    render_count_zone(frame, app, chunks[1]);
    render_mode_zone(frame, app, chunks[2]);
    render_right_zone(frame, app, chunks[3]);
}

fn render_left_zone(frame: &mut Frame, app: &App, area: Rect) {
    let context = if app.query_input.is_empty() {
        "open library".to_string()
    } else {
        app.query_input.to_lowercase()
    };

    let content = Line::from(vec![
        Span::styled(
            " bookfinder ",
            Style::default()
                .fg(app.theme.frost_ice())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("> ", Style::default().fg(app.theme.muted())),
        Span::styled(context, Style::default().fg(app.theme.frost_mint())),
    ]);

    frame.render_widget(
        Paragraph::new(content).style(Style::default().bg(app.theme.bg_secondary())),
        area,
    );
}

fn render_count_zone(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let text = if session.is_loading() {
        "searching...".to_string()
    } else if session.has_searched() {
        format!(
            "{} of {} results",
            session.visible().len(),
            session.num_found()
        )
    } else {
        String::new()
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(app.theme.muted()),
        )))
        .style(Style::default().bg(app.theme.bg_secondary()))
        .alignment(Alignment::Center),
        area,
    );
}

fn render_mode_zone(frame: &mut Frame, app: &App, area: Rect) {
    let (bg, fg) = match app.mode {
        Mode::Query | Mode::Form => (app.theme.yellow(), app.theme.bg()),
        Mode::Results => (app.theme.frost_blue(), app.theme.fg_bright()),
        Mode::Detail => (app.theme.green(), app.theme.bg()),
    };

    let content = Line::from(Span::styled(
        format!(" {} ", app.mode),
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        area,
    );
}

fn render_right_zone(frame: &mut Frame, app: &App, area: Rect) {
    let text = if !app.status_message.is_empty() {
        app.status_message.clone()
    } else {
        format!("Sort: {}", app.session.sort_key().label())
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{text} "),
            Style::default().fg(app.theme.fg()),
        )))
        .style(Style::default().bg(app.theme.bg_secondary()))
        .alignment(Alignment::Right),
        area,
    );
}
