use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, Mode};

pub fn handle_query_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Tab => app.mode = Mode::Form,
        KeyCode::Esc => {
            if app.session.has_searched() {
                app.mode = Mode::Results;
            }
        }
        KeyCode::Backspace => {
            app.query_input.pop();
        }
        KeyCode::Char(c) => app.query_input.push(c),
        _ => {}
    }
}

pub fn handle_form_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.active_value_mut().clear();
        }
        KeyCode::Char('l') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.clear();
            app.status_message = "Form cleared".to_string();
        }
        KeyCode::Enter => app.submit_search(),
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Esc => app.mode = Mode::Query,
        KeyCode::Backspace => {
            app.form.active_value_mut().pop();
        }
        KeyCode::Char(c) => app.form.active_value_mut().push(c),
        _ => {}
    }
}
