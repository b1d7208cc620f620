pub mod app;
pub mod event;
pub mod keys;
pub mod tasks;
pub mod theme;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use app::App;
use event::{AppEvent, EventHandler};

/// Run the full TUI application. Must be called with a tokio runtime
/// entered, so background search tasks have somewhere to run.
pub fn run_tui(app: &mut App) -> Result<()> {
    // Restore the terminal even if rendering panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = std::io::stdout().execute(crossterm::terminal::LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let event_handler = EventHandler::new(Duration::from_millis(app.config.ui.tick_rate_ms));

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => keys::handle_key(app, key.code, key.modifiers),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => {}
            // Async results only ever arrive over the channel.
            AppEvent::SearchLoaded { .. } => {}
        }

        app.drain_async();

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
