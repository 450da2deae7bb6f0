//! # RootView Component
//!
//! The whole screen: a top bar, then a scrollable column holding the data
//! panel, a one-row gap and the action panel.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ ← MyLib                      │  TitleBar
//! │                              │
//! │  Library name MyLib          │ ┐
//! │        Author CBN            │ │
//! │       License Commercial     │ │ ScrollView canvas
//! │                              │ │
//! │         ╭───────────╮        │ │
//! │         │ Do action │        │ │
//! │         ╰───────────╯        │ │
//! │  Tomorrow                    │ ┘
//! └──────────────────────────────┘
//! ```
//!
//! RootView has no state of its own beyond scrolling. Each `update` call is
//! routed to exactly one child.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::listener::ActionListener;
use crate::core::record::{DataRecord, OtherDataRecord};
use crate::tui::component::{Component, EventHandler, Update};
use crate::tui::components::{ActionPanel, DataPanel, TitleBar};
use crate::tui::event::TuiEvent;

/// Rows between the data panel and the action panel.
const PANEL_GAP: u16 = 1;
/// Outer margin around the scrollable content.
const CONTENT_MARGIN: Margin = Margin {
    horizontal: 2,
    vertical: 1,
};

pub struct RootView {
    title_bar: TitleBar,
    data_panel: DataPanel,
    action_panel: ActionPanel,
    scroll_state: ScrollViewState,
    /// Screen area of the scroll viewport on the last render
    viewport: Rect,
    /// Canvas height on the last render
    content_height: u16,
    /// Action panel position inside the canvas on the last render
    action_area: Rect,
}

impl RootView {
    pub fn new(title: String, listener: Option<Box<dyn ActionListener>>) -> Self {
        Self {
            title_bar: TitleBar::new(title, true),
            data_panel: DataPanel::new(),
            action_panel: ActionPanel::new(listener),
            scroll_state: ScrollViewState::default(),
            viewport: Rect::default(),
            content_height: 0,
            action_area: Rect::default(),
        }
    }

    pub fn data_panel(&self) -> &DataPanel {
        &self.data_panel
    }

    pub fn action_panel(&self) -> &ActionPanel {
        &self.action_panel
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// True if the screen cell (`col`, `row`) is on the visible button.
    pub fn hit_test_button(&self, col: u16, row: u16) -> bool {
        let pos = Position::new(col, row);
        if !self.viewport.contains(pos) {
            return false;
        }
        let canvas = Position::new(
            col - self.viewport.x,
            row - self.viewport.y + self.scroll_offset(),
        );
        ActionPanel::button_rect(self.action_area).contains(canvas)
    }
}

impl Update<DataRecord> for RootView {
    fn update(&mut self, record: &DataRecord) {
        self.data_panel.update(record);
    }
}

impl Update<OtherDataRecord> for RootView {
    fn update(&mut self, record: &OtherDataRecord) {
        self.action_panel.update(record);
    }
}

impl Component for RootView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        self.title_bar.render(frame, title_area);

        let viewport = body_area.inner(CONTENT_MARGIN);
        let content_width = viewport.width.saturating_sub(1); // -1 for scrollbar safe area

        let data_height = self.data_panel.calculate_height(content_width);
        let action_height = self.action_panel.calculate_height(content_width);
        let data_area = Rect::new(0, 0, content_width, data_height);
        let action_area = Rect::new(
            0,
            data_height.saturating_add(PANEL_GAP),
            content_width,
            action_height,
        );

        self.viewport = viewport;
        self.content_height = action_area.bottom();
        self.action_area = action_area;
        self.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, self.content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(&self.data_panel, data_area);
        scroll_view.render_widget(&self.action_panel, action_area);

        frame.render_stateful_widget(scroll_view, viewport, &mut self.scroll_state);
    }
}

/// Emits `()` when the event activated the button.
impl EventHandler for RootView {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Activate => self.action_panel.handle_event(event),
            TuiEvent::MouseClick(col, row) if self.hit_test_button(*col, *row) => {
                self.action_panel.activate();
                Some(())
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}
