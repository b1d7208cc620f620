use crossterm::event::KeyCode;

use crate::app::{App, Mode};

pub fn handle_results_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('/') => app.mode = Mode::Query,
        KeyCode::Char('a') => app.mode = Mode::Form,
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => app.jump_top(),
        KeyCode::Char('G') => app.jump_bottom(),
        KeyCode::Char('s') => {
            app.sort_pending = true;
            app.status_message =
                "Sort: t=title y=newest Y=oldest r=rating v=relevance".to_string();
        }
        KeyCode::Enter => app.select_current(),
        _ => {}
    }
}

pub fn handle_detail_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_detail(),
        _ => {}
    }
}
