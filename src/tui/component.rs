use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props-down pattern: they receive data via struct
/// fields (a borrowed `MovieSummary` slice, a `busy` flag), may hold
/// internal presentation state (cursor, scroll), and render into a `Frame`
/// within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can update internal caches and
/// presentation state (scroll clamping, cursor placement) during the render
/// pass. This aligns with ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// Emitted events are semantic ("search for this", "open that id"), never
/// raw key codes; the event loop decides what they mean for the app.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
