use bookfinder_core::Book;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let focused = app.mode == Mode::Results;
    let border_color = if focused {
        app.theme.active_panel()
    } else {
        app.theme.border()
    };

    let title = if session.has_searched() {
        format!(
            " Books ({} of {}) ",
            session.visible().len(),
            session.num_found()
        )
    } else {
        " Books ".to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if session.is_loading() {
        render_message(frame, inner, "Searching for books...", app.theme.muted());
        return;
    }

    // The error banner sits above whatever results survived the failure.
    let mut list_area = inner;
    if let Some(error) = session.error() {
        let banner = Rect { height: 1, ..inner };
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.to_string(),
                Style::default().fg(app.theme.red()),
            )),
            banner,
        );
        list_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
    }

    if !session.has_searched() {
        render_message(
            frame,
            list_area,
            "Press / to search by title, author, or subject",
            app.theme.muted(),
        );
        return;
    }

    if session.no_matches() {
        render_message(
            frame,
            list_area,
            "No books found. Try adjusting your search terms.",
            app.theme.yellow(),
        );
        return;
    }

    let visible_height = list_area.height as usize;
    let scroll_offset = if app.selected_index >= visible_height {
        app.selected_index - visible_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = session
        .visible()
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, book)| book_row(app, i, book, focused))
        .collect();

    frame.render_widget(List::new(items), list_area);
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(color),
        )),
    ]);
    frame.render_widget(msg, area);
}

fn book_row(app: &App, index: usize, book: &Book, focused: bool) -> ListItem<'static> {
    let selected = index == app.selected_index;
    let marker = if selected { "> " } else { "  " };

    let title_style = if selected && focused {
        Style::default()
            .fg(app.theme.fg_bright())
            .bg(app.theme.bg_secondary())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.fg())
    };

    let rating = book
        .rating_display()
        .map(|r| format!("* {r}"))
        .unwrap_or_default();
    let editions = book
        .edition_count
        .map(|n| format!("{n} ed."))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(format!("{marker}{:<44.44}", book.title), title_style),
        Span::styled(
            format!("  {:<28.28}", book.author_line()),
            Style::default().fg(app.theme.frost_mint()),
        ),
        Span::styled(
            format!("  {:>4}", book.year_display()),
            Style::default().fg(app.theme.frost_ice()),
        ),
        Span::styled(
            format!("  {rating:<6}"),
            Style::default().fg(app.theme.yellow()),
        ),
        Span::styled(
            format!("  {editions:<8}"),
            Style::default().fg(app.theme.muted()),
        ),
    ]);

    ListItem::new(line)
}
