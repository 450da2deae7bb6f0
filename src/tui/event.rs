use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    /// Enter or Space: press the focused button
    Activate,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(ev) => translate(ev),
            Err(e) => {
                log::warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            log::warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

/// Map a raw crossterm event to a `TuiEvent`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Ignore release/repeat reports from keyboard-enhanced terminals
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Activate),
                (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
