//! # ActionPanel Component
//!
//! A centered button above the expiration label.
//!
//! ```text
//!        ╭───────────╮
//!        │ Do action │
//!        ╰───────────╯
//! Tomorrow
//! ```
//!
//! The panel does not know who handles the button. It is handed an
//! [`ActionListener`] at construction and calls it once per activation,
//! synchronously, with no debouncing.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::listener::ActionListener;
use crate::core::record::{OtherDataRecord, PLACEHOLDER};
use crate::tui::component::{Component, EventHandler, Update};
use crate::tui::event::TuiEvent;
use crate::tui::text_wrap;

pub const BUTTON_CAPTION: &str = "Do action";

/// Borders (top + bottom) around a one-line caption.
const BUTTON_HEIGHT: u16 = 3;
/// Borders plus one column of padding per side.
const BUTTON_H_OVERHEAD: u16 = 4;

pub struct ActionPanel {
    expiration: String,
    listener: Option<Box<dyn ActionListener>>,
}

impl ActionPanel {
    pub fn new(listener: Option<Box<dyn ActionListener>>) -> Self {
        Self {
            expiration: PLACEHOLDER.to_string(),
            listener,
        }
    }

    pub fn expiration(&self) -> &str {
        &self.expiration
    }

    /// Press the button. A no-op when no listener was supplied.
    pub fn activate(&self) {
        match &self.listener {
            Some(listener) => listener.on_action(),
            None => log::debug!("Button activated with no listener attached"),
        }
    }

    /// Where the button lands inside `area`: horizontally centered, top row.
    pub fn button_rect(area: Rect) -> Rect {
        let width = (BUTTON_CAPTION.width() as u16 + BUTTON_H_OVERHEAD).min(area.width);
        let height = BUTTON_HEIGHT.min(area.height);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, height)
    }

    pub fn calculate_height(&self, width: u16) -> u16 {
        BUTTON_HEIGHT.saturating_add(text_wrap::line_count(&self.expiration, width))
    }
}

impl Update<OtherDataRecord> for ActionPanel {
    fn update(&mut self, record: &OtherDataRecord) {
        self.expiration.clone_from(&record.expiration);
    }
}

impl Widget for &ActionPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let button_area = ActionPanel::button_rect(area);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .style(Style::default().add_modifier(Modifier::BOLD));
        let caption_area = block.inner(button_area);
        block.render(button_area, buf);
        Paragraph::new(BUTTON_CAPTION)
            .alignment(Alignment::Center)
            .render(caption_area, buf);

        let label_area = Rect {
            y: area.y.saturating_add(button_area.height),
            height: area.height.saturating_sub(button_area.height),
            ..area
        };
        Paragraph::new(self.expiration.as_str())
            .wrap(Wrap { trim: false })
            .render(label_area, buf);
    }
}

impl Component for ActionPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&*self, area);
    }
}

/// Emits `()` when the event activated the button.
impl EventHandler for ActionPanel {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Activate => {
                self.activate();
                Some(())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingListener, buffer_lines, buffer_text, render_to_buffer};

    fn panel_with_counter() -> (ActionPanel, CountingListener) {
        let listener = CountingListener::default();
        let panel = ActionPanel::new(Some(Box::new(listener.clone())));
        (panel, listener)
    }

    #[test]
    fn test_update_replaces_expiration() {
        let mut panel = ActionPanel::new(None);
        assert_eq!(panel.expiration(), "...");

        panel.update(&OtherDataRecord::new("Tomorrow"));
        assert_eq!(panel.expiration(), "Tomorrow");

        panel.update(&OtherDataRecord::new(""));
        assert_eq!(panel.expiration(), "");
    }

    #[test]
    fn test_single_activation_invokes_listener_once() {
        let (panel, listener) = panel_with_counter();
        panel.activate();
        assert_eq!(listener.calls.get(), 1);
    }

    #[test]
    fn test_rapid_activations_are_not_debounced() {
        let (mut panel, listener) = panel_with_counter();
        for _ in 0..5 {
            panel.handle_event(&TuiEvent::Activate);
        }
        assert_eq!(listener.calls.get(), 5);
    }

    #[test]
    fn test_activation_without_listener_is_noop() {
        let mut panel = ActionPanel::new(None);
        panel.activate();
        assert_eq!(panel.handle_event(&TuiEvent::Activate), Some(()));
        assert_eq!(panel.expiration(), "...");
    }

    #[test]
    fn test_closure_listener() {
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = hits.clone();
        let panel = ActionPanel::new(Some(Box::new(move || counter.set(counter.get() + 1))));
        panel.activate();
        panel.activate();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_other_events_do_not_activate() {
        let (mut panel, listener) = panel_with_counter();
        assert_eq!(panel.handle_event(&TuiEvent::ScrollDown), None);
        assert_eq!(panel.handle_event(&TuiEvent::MouseClick(0, 0)), None);
        assert_eq!(listener.calls.get(), 0);
    }

    #[test]
    fn test_button_rect_is_centered() {
        let rect = ActionPanel::button_rect(Rect::new(0, 0, 33, 10));
        assert_eq!(rect.width, 13);
        assert_eq!(rect.height, 3);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 0);
    }

    #[test]
    fn test_button_rect_clamps_to_narrow_area() {
        let rect = ActionPanel::button_rect(Rect::new(2, 1, 6, 2));
        assert_eq!(rect, Rect::new(2, 1, 6, 2));
    }

    #[test]
    fn test_render_shows_button_and_expiration() {
        let mut panel = ActionPanel::new(None);
        panel.update(&OtherDataRecord::new("Tomorrow"));
        let buffer = render_to_buffer(&mut panel, 33, 4);
        let lines = buffer_lines(&buffer);

        assert!(buffer_text(&buffer).contains(BUTTON_CAPTION));
        assert!(lines[1].contains("│Do action│") || lines[1].contains("│ Do action │"));
        assert!(lines[3].starts_with("Tomorrow"));
    }

    #[test]
    fn test_calculate_height() {
        let mut panel = ActionPanel::new(None);
        assert_eq!(panel.calculate_height(40), 4);
        panel.update(&OtherDataRecord::new("next week at the latest"));
        assert_eq!(panel.calculate_height(10), 3 + 3);
    }

    #[test]
    fn test_calculate_height_saturates_on_huge_expiration() {
        let mut panel = ActionPanel::new(None);
        panel.update(&OtherDataRecord::new("x".repeat(2 * 65_536)));
        assert_eq!(panel.calculate_height(2), u16::MAX);
    }
}
