//! Interactive link browser.
//!
//! The loop owns the [`AppState`]; the links file is loaded on a background
//! thread and handed over through a channel, and a one second tick keeps the
//! header clock current.

mod app;
mod components;
mod palette;
mod ui;

pub use app::AppState;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use linkhub_runtime::LoadOutcome;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

pub fn run(mut app_state: AppState, rx: Receiver<LoadOutcome>) -> Result<()> {
    // Installed before raw mode so a failure leaves the terminal untouched
    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app_state.resize(size.width);

    let result = event_loop(&mut terminal, &mut app_state, rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: &mut AppState,
    rx: Receiver<LoadOutcome>,
) -> Result<()> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    while !app_state.should_quit {
        terminal.draw(|f| ui::draw(f, app_state))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app_state.handle_key(key),
                Event::Resize(width, _) => app_state.resize(width),
                _ => {}
            }
        }

        if app_state.hub.is_loading() {
            if let Ok(outcome) = rx.try_recv() {
                app_state.hub.links_loaded(outcome);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app_state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
