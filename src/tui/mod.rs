//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, runs the presentation loop,
//! and feeds translated input events to the [`HostScreen`].
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an input event, a
//! terminal resize, or an action arriving from the deferred load. Between
//! those it sleeps in `poll` for up to 100ms, which bounds how late the
//! deferred load can appear on screen.

pub mod component;
pub mod components;
pub mod event;
pub mod screen;
mod text_wrap;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::Preview;
use crate::core::config::ResolvedConfig;
use crate::tui::component::Component;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screen::HostScreen;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Run the screen until the user quits.
///
/// Must be called from within a tokio runtime; the deferred load is a tokio task.
pub fn run(config: ResolvedConfig, preview: Option<Preview>) -> std::io::Result<()> {
    let mut screen = match preview {
        Some(preset) => HostScreen::with_data(&config, preset.record()),
        None => HostScreen::new(&config),
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Mouse capture unavailable, keyboard only: {}", e);
            None
        }
    };

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| screen.render(f, f.area())) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(POLL_TIMEOUT);
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if event == TuiEvent::Quit {
                should_quit = true;
                break;
            }
            screen.handle_event(&event);
        }

        if should_quit {
            break Ok(());
        }

        // Actions posted from outside the input path (the deferred load)
        if screen.pump() {
            debug!("Applied background actions, redrawing");
            needs_redraw = true;
        }
    };

    screen.teardown();
    ratatui::restore();
    info!("libinfo shut down");
    result
}
