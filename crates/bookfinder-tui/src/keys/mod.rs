mod input;
mod results;
mod sort;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, Mode};

pub(crate) fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // A pending `s` consumes the next key as the sort criterion.
    if app.sort_pending {
        app.sort_pending = false;
        sort::handle_sort_command(app, code);
        return;
    }

    match app.mode {
        Mode::Query => input::handle_query_mode(app, code),
        Mode::Form => input::handle_form_mode(app, code, modifiers),
        Mode::Results => results::handle_results_mode(app, code),
        Mode::Detail => results::handle_detail_mode(app, code),
    }
}
