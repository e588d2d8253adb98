use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::store::CatalogStore;
use crate::tui::component::CatalogView;
use crate::tui::{TuiState, View};

/// Top-level draw: one-line title bar, the active view, and a banner line
/// carrying the store's error text whenever the last operation failed.
pub fn draw_ui(frame: &mut Frame, store: &CatalogStore, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let banner_height = if store.error.is_some() { 1 } else { 0 };
    let layout = Layout::vertical([Length(1), Min(0), Length(banner_height)]);
    let [title_area, main_area, banner_area] = layout.areas(frame.area());

    let title_text = match store.books.len() {
        1 => "Shelf — book catalog (1 book)".to_string(),
        n => format!("Shelf — book catalog ({n} books)"),
    };
    frame.render_widget(Span::raw(title_text), title_area);

    match &mut tui.view {
        View::List => tui.list.render(frame, main_area, &store.books),
        View::Detail(detail) => detail.render(frame, main_area, &store.books),
        View::Form(form) => form.render(frame, main_area),
    }

    if let Some(error_msg) = &store.error {
        let banner = Paragraph::new(error_msg.as_str())
            .style(Style::default().fg(Color::White).bg(Color::Red));
        frame.render_widget(banner, banner_area);
    }
}
