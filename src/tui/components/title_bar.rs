//! # TitleBar Component
//!
//! Top bar of the screen: an up-navigation affordance followed by the screen
//! title. Purely decorative, it holds props and no state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("MyLib".to_string(), true);
//! title_bar.render(frame, area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Top bar component.
///
/// # Props
///
/// - `title`: Screen title (e.g., "MyLib")
/// - `show_home_as_up`: Whether to draw the `←` affordance before the title
pub struct TitleBar {
    pub title: String,
    pub show_home_as_up: bool,
}

impl TitleBar {
    pub fn new(title: String, show_home_as_up: bool) -> Self {
        Self {
            title,
            show_home_as_up,
        }
    }

    fn text(&self) -> String {
        if self.show_home_as_up {
            format!(" ← {}", self.title)
        } else {
            format!(" {}", self.title)
        }
    }
}

impl Component for TitleBar {
    /// Render the bar as a single reversed line spanning the full width.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().add_modifier(Modifier::REVERSED);
        let line = Line::from(Span::styled(
            self.text(),
            bar_style.add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).style(bar_style), area);
    }
}
