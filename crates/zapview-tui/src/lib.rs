//! zapview-tui: terminal UI for the zapview conversation viewer.
//!
//! This crate provides the interactive viewer:
//! - Two-pane layout: conversation list and message transcript
//! - Non-blocking fetches applied to an explicit [`App`] state
//! - Localized labels, error banner, and help overlay

mod app;
mod event;
mod fetch;
pub mod format;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod ui;

pub use app::{App, DetailRequest, Effect, DETAIL_ERROR, LIST_ERROR};
pub use event::{Action, Event, EventHandler};

use crate::fetch::{FetchOutcome, FetchPool};
use crate::screens::viewer::ViewerScreen;
use crate::screens::Screen as _;
use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use zapview_api::ApiClient;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application against the given API base URL.
///
/// Sets up the terminal, issues the mount-time list fetch, runs the event
/// loop, and restores the terminal on exit.
pub async fn run_tui(base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let mut pool = FetchPool::new(ApiClient::new(base_url));

    // The mount-time list fetch; everything after this is user-driven.
    app.list_loading = true;
    pool.spawn_list();

    // 4 Hz tick rate drives the loading spinner.
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events, &mut pool).await;

    pool.abort_all();
    terminal.show_cursor()?;
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    pool: &mut FetchPool,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            ViewerScreen.render(app, area, buf);
            if app.show_help {
                screens::render_help_overlay(area, buf);
            }
        })?;

        // Apply completed fetches before handling the next input.
        for outcome in pool.drain_finished().await {
            match outcome {
                FetchOutcome::List(result) => app.apply_list(result),
                FetchOutcome::Detail { seq, result } => app.apply_detail(seq, result),
            }
        }

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    let action = event::key_to_action(key);
                    match app.handle_action(action) {
                        Effect::FetchList => pool.spawn_list(),
                        Effect::FetchDetail(request) => pool.spawn_detail(request),
                        Effect::None => {}
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => {
                        app.handle_action(Action::ScrollUp);
                    }
                    MouseEventKind::ScrollDown => {
                        app.handle_action(Action::ScrollDown);
                    }
                    _ => {}
                },
                Event::Tick => app.tick(),
                Event::Resize(_, _) => {
                    // Ratatui reflows on the next draw.
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
