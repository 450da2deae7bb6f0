//! # DataPanel Component
//!
//! Three label/value rows showing the library name, author and license.
//!
//! ```text
//! Library name MyLib
//!       Author CBN
//!      License Commercial
//! ```
//!
//! Labels are right-aligned against a shared edge set by the widest label.
//! Values start one column after that edge and wrap to the remaining width;
//! each label sits on the middle line of its wrapped value.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::record::{DataRecord, PLACEHOLDER};
use crate::tui::component::{Component, Update};
use crate::tui::text_wrap;

pub const LABELS: [&str; 3] = ["Library name", "Author", "License"];

/// Columns between the label edge and the value.
const LABEL_GAP: u16 = 1;

pub struct DataPanel {
    name: String,
    author: String,
    license: String,
}

impl Default for DataPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DataPanel {
    pub fn new() -> Self {
        Self {
            name: PLACEHOLDER.to_string(),
            author: PLACEHOLDER.to_string(),
            license: PLACEHOLDER.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    /// Width of the label column: the widest label in display columns.
    pub fn label_width() -> u16 {
        LABELS.iter().map(|l| l.width()).max().unwrap_or(0) as u16
    }

    fn values(&self) -> [&str; 3] {
        [&self.name, &self.author, &self.license]
    }

    fn value_width(width: u16) -> u16 {
        width.saturating_sub(Self::label_width() + LABEL_GAP)
    }

    /// Calculate the height required for the panel given a width.
    ///
    /// Lets the parent size its scroll canvas without rendering first.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let value_width = Self::value_width(width);
        self.values()
            .iter()
            .map(|v| text_wrap::line_count(v, value_width))
            .fold(0, u16::saturating_add)
    }
}

impl Update<DataRecord> for DataPanel {
    /// Replace all three values at once.
    fn update(&mut self, record: &DataRecord) {
        self.name.clone_from(&record.name);
        self.author.clone_from(&record.author);
        self.license.clone_from(&record.license);
    }
}

impl Widget for &DataPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = DataPanel::label_width();
        let value_x = area.x.saturating_add(label_width + LABEL_GAP);
        let value_width = DataPanel::value_width(area.width);
        let label_style = Style::default().add_modifier(Modifier::BOLD);

        let mut y = area.y;
        for (label, value) in LABELS.iter().zip(self.values()) {
            if y >= area.bottom() {
                break;
            }
            let lines = text_wrap::wrap(value, value_width);
            let height = text_wrap::clamp_height(lines.len());

            // Label on the middle line of the value
            let label_y = y.saturating_add(height.saturating_sub(1) / 2);
            let label_rect = Rect::new(area.x, label_y, label_width, 1).intersection(area);
            Paragraph::new(Line::from(Span::styled(*label, label_style)))
                .alignment(Alignment::Right)
                .render(label_rect, buf);

            let value_rect = Rect::new(value_x, y, value_width, height).intersection(area);
            let value_lines: Vec<Line> = lines
                .into_iter()
                .take(value_rect.height as usize)
                .map(Line::from)
                .collect();
            Paragraph::new(value_lines).render(value_rect, buf);

            y = y.saturating_add(height);
        }
    }
}

impl Component for DataPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_lines, render_to_buffer};

    #[test]
    fn test_new_shows_placeholders() {
        let panel = DataPanel::new();
        assert_eq!(panel.name(), "...");
        assert_eq!(panel.author(), "...");
        assert_eq!(panel.license(), "...");
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let mut panel = DataPanel::new();
        panel.update(&DataRecord::new("MyLib", "CBN", "Commercial"));
        assert_eq!(panel.name(), "MyLib");
        assert_eq!(panel.author(), "CBN");
        assert_eq!(panel.license(), "Commercial");

        // No merge: a second update overwrites everything
        panel.update(&DataRecord::new("Other", "", "MIT"));
        assert_eq!(panel.name(), "Other");
        assert_eq!(panel.author(), "");
        assert_eq!(panel.license(), "MIT");
    }

    #[test]
    fn test_update_keeps_text_verbatim() {
        let mut panel = DataPanel::new();
        let record = DataRecord::new("  spaced  ", "ünïcødé ✓", "line\tbreak");
        panel.update(&record);
        assert_eq!(panel.name(), record.name);
        assert_eq!(panel.author(), record.author);
        assert_eq!(panel.license(), record.license);
    }

    #[test]
    fn test_label_width_is_widest_label() {
        assert_eq!(DataPanel::label_width(), "Library name".len() as u16);
    }

    #[test]
    fn test_labels_right_aligned_on_shared_edge() {
        let mut panel = DataPanel::new();
        panel.update(&DataRecord::new("MyLib", "CBN", "Commercial"));
        let lines = buffer_lines(&render_to_buffer(&mut panel, 40, 3));

        assert!(lines[0].starts_with("Library name MyLib"));
        assert!(lines[1].starts_with("      Author CBN"));
        assert!(lines[2].starts_with("     License Commercial"));
    }

    #[test]
    fn test_calculate_height_single_lines() {
        let panel = DataPanel::new();
        assert_eq!(panel.calculate_height(40), 3);
    }

    #[test]
    fn test_calculate_height_wraps_long_values() {
        let mut panel = DataPanel::new();
        // 13 columns of labels + gap leaves 7 columns for values
        panel.update(&DataRecord::new("one two three", "CBN", "MIT"));
        assert_eq!(panel.calculate_height(20), 4);
    }

    #[test]
    fn test_empty_value_still_takes_a_row() {
        let mut panel = DataPanel::new();
        panel.update(&DataRecord::new("", "", ""));
        assert_eq!(panel.calculate_height(40), 3);
    }

    #[test]
    fn test_height_saturates_on_huge_value() {
        let mut panel = DataPanel::new();
        // Value column is 2 wide at width 15: 65536 lines, more than u16 holds
        panel.update(&DataRecord::new("x".repeat(2 * 65_536), "a", "b"));
        assert_eq!(panel.calculate_height(15), u16::MAX);
    }

    #[test]
    fn test_huge_value_renders_without_overflow() {
        let mut panel = DataPanel::new();
        panel.update(&DataRecord::new("x".repeat(2 * 65_536), "a", "b"));
        let lines = buffer_lines(&render_to_buffer(&mut panel, 15, 4));

        assert!(lines[0].starts_with("             xx"));
        assert!(lines[3].starts_with("             xx"));
    }

    #[test]
    fn test_label_centered_on_wrapped_value() {
        let mut panel = DataPanel::new();
        panel.update(&DataRecord::new("aaaa bbbb cccc", "CBN", "Commercial"));
        let lines = buffer_lines(&render_to_buffer(&mut panel, 18, 5));

        // Value wraps to three lines of 4 columns; label sits on the middle one
        assert!(lines[0].starts_with("             aaaa"));
        assert!(lines[1].starts_with("Library name bbbb"));
        assert!(lines[2].starts_with("             cccc"));
        assert!(lines[3].starts_with("      Author CBN"));
    }
}
