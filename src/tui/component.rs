use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components own the text they display and expose `update(record)` setters
/// to the outside; everything else about their widget tree stays private.
/// They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so components can keep presentation state
/// (scroll offsets, last rendered area) current during the render pass.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

/// A component that can be refreshed from a record of type `R`.
///
/// Each call fully overwrites what was displayed before. Implementors copy the
/// text they need and never hold on to the record.
pub trait Update<R> {
    fn update(&mut self, record: &R);
}
