use bookfinder_catalog::{CoverSize, covers};
use bookfinder_core::Book;
use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::App;
use crate::ui::centered_rect;

pub fn render(frame: &mut Frame, app: &App, book: &Book) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Book ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.active_panel()))
        .style(Style::default().bg(app.theme.bg()));

    let label = Style::default().fg(app.theme.muted());
    let value = Style::default().fg(app.theme.fg());

    let mut lines = vec![
        Line::from(Span::styled(
            book.title.clone(),
            Style::default()
                .fg(app.theme.fg_bright())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            book.author_line(),
            Style::default().fg(app.theme.frost_mint()),
        )),
        Line::from(""),
    ];

    let mut field = |name: &str, text: Option<String>| {
        if let Some(text) = text {
            lines.push(Line::from(vec![
                Span::styled(format!("{name:<16}"), label),
                Span::styled(text, value),
            ]));
        }
    };

    field(
        "First published",
        book.first_publish_year.map(|y| y.to_string()),
    );
    field(
        "Publisher",
        book.publisher.as_deref().map(|p| join_capped(p, 3)),
    );
    field(
        "Languages",
        book.language.as_deref().map(|l| join_capped(l, 5)),
    );
    field("Editions", book.edition_count.map(|n| n.to_string()));
    field(
        "Rating",
        book.rating_display().map(|r| match book.ratings_count {
            Some(count) => format!("{r} ({count} ratings)"),
            None => r,
        }),
    );
    field("ISBN", book.isbn.as_deref().map(|i| join_capped(i, 2)));
    field(
        "Subjects",
        book.subject.as_deref().map(|s| join_capped(s, 5)),
    );
    field(
        "Cover",
        Some(covers::cover_url_with_base(
            &app.config.catalog.covers_base_url,
            book.cover_i,
            CoverSize::Large,
        )),
    );
    field("Key", Some(book.key.clone()));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc: close",
        Style::default().fg(app.theme.muted()),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn join_capped(values: &[String], cap: usize) -> String {
    let mut joined = values
        .iter()
        .take(cap)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if values.len() > cap {
        joined.push_str(&format!(" (+{})", values.len() - cap));
    }
    joined
}
