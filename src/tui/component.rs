use ratatui::Frame;
use ratatui::layout::Rect;

use crate::api::Book;

/// A view over the current catalog snapshot.
///
/// Views receive the data they render as parameters ("props") and may hold
/// internal presentation state (selection, field focus). `render` takes
/// `&mut self` so a view can update that state during the render pass,
/// aligning with ratatui's `StatefulWidget` pattern.
pub trait CatalogView {
    /// Render the view into the given area from the current book snapshot.
    fn render(&mut self, frame: &mut Frame, area: Rect, books: &[Book]);
}

/// A view that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this view emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
