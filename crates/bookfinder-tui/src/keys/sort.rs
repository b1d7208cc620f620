use bookfinder_core::SortKey;
use crossterm::event::KeyCode;

use crate::app::App;

pub fn handle_sort_command(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('t') => app.set_sort(SortKey::Title),
        KeyCode::Char('y') => app.set_sort(SortKey::YearDesc),
        KeyCode::Char('Y') => app.set_sort(SortKey::YearAsc),
        KeyCode::Char('r') => app.set_sort(SortKey::RatingDesc),
        KeyCode::Char('v') => app.set_sort(SortKey::Relevance),
        _ => {
            if code == KeyCode::Esc {
                app.status_message.clear();
            } else {
                app.status_message = "Sort cancelled".to_string();
            }
        }
    }
}
