//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::listener::ActionListener;
use crate::tui::component::Component;

/// Listener that counts how often it was invoked.
#[derive(Clone, Default)]
pub struct CountingListener {
    pub calls: Rc<Cell<u32>>,
}

impl ActionListener for CountingListener {
    fn on_action(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

/// Yield to the runtime a few times so woken tasks get to run.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Render a component into a fresh `width` x `height` test terminal.
pub fn render_to_buffer<C: Component>(component: &mut C, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| component.render(f, f.area()))
        .unwrap();
    terminal.backend().buffer().clone()
}

/// One string per buffer row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// The whole buffer as one string.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
