//! # Book Detail View
//!
//! Renders a single record resolved by id from the current in-memory
//! catalog. A missing id is a view-local "not found" panel, distinct from
//! the store's network-error banner.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::api::Book;
use crate::tui::component::CatalogView;

/// Persistent state for the detail view: just the id being shown. The
/// record itself is resolved from the catalog snapshot at render time so
/// an edit elsewhere is reflected immediately.
pub struct BookDetailState {
    pub id: i64,
}

impl BookDetailState {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl CatalogView for BookDetailState {
    fn render(&mut self, frame: &mut Frame, area: Rect, books: &[Book]) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Details ")
            .title_bottom(Line::from(" e Edit  Esc Back ").centered())
            .padding(Padding::new(2, 2, 1, 1));

        let Some(book) = books.iter().find(|b| b.id == self.id) else {
            let not_found = Paragraph::new("Book not found")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(not_found, area);
            return;
        };

        let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(
                book.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            field_line("Author", &book.author, label),
            field_line("Year", &book.year.to_string(), label),
        ];

        // Optional fields only render when present.
        for (name, value) in [
            ("Genre", &book.genre),
            ("ISBN", &book.isbn),
            ("Publisher", &book.publisher),
            ("Description", &book.description),
        ] {
            if let Some(value) = value {
                lines.push(field_line(name, value, label));
            }
        }

        if !book.updated_at.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Last updated {}", book.updated_at),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(detail, area);
    }
}

fn field_line(name: &str, value: &str, label: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name}: "), label),
        Span::raw(value.to_string()),
    ])
}
