//! # Book List View
//!
//! The main catalog view: one row per book with title, author, and year.
//! Offers navigation to the detail view plus the create/edit/delete entry
//! points. Delete uses a double-press confirmation so a stray `d` cannot
//! drop a record.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::api::Book;
use crate::tui::component::{CatalogView, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the list view.
pub struct BookListState {
    pub selected: usize,
    pub confirm_delete: bool,
    pub list_state: ListState,
    len: usize,
}

/// Events emitted by the list view, relative to the current selection.
#[derive(Debug, PartialEq, Eq)]
pub enum ListEvent {
    /// Open the detail view for the selected book.
    Open,
    /// Open an empty form to create a book.
    Create,
    /// Open the form pre-filled with the selected book.
    Edit,
    /// Delete the selected book (second `d` press).
    Delete,
    /// Re-fetch the catalog from the server.
    Refresh,
    Quit,
}

impl BookListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            confirm_delete: false,
            list_state: ListState::default(),
            len: 0,
        }
    }

    /// Sync with the current catalog length; called once per frame before
    /// events are handled. Clamps the selection after deletions.
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

impl Default for BookListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for BookListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        // Reset delete confirmation on any non-delete key
        let is_delete_key = matches!(event, TuiEvent::InputChar('d'));
        if !is_delete_key {
            self.confirm_delete = false;
        }

        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(ListEvent::Quit),
            TuiEvent::CursorUp => {
                if self.len > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    self.selected = (self.selected + 1).min(self.len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => {
                if self.len > 0 {
                    Some(ListEvent::Open)
                } else {
                    None
                }
            }
            TuiEvent::InputChar('a') => Some(ListEvent::Create),
            TuiEvent::InputChar('e') => {
                if self.len > 0 {
                    Some(ListEvent::Edit)
                } else {
                    None
                }
            }
            TuiEvent::InputChar('r') => Some(ListEvent::Refresh),
            TuiEvent::InputChar('d') => {
                if self.len == 0 {
                    return None;
                }
                if self.confirm_delete {
                    self.confirm_delete = false;
                    Some(ListEvent::Delete)
                } else {
                    self.confirm_delete = true;
                    None
                }
            }
            _ => None,
        }
    }
}

impl CatalogView for BookListState {
    fn render(&mut self, frame: &mut Frame, area: Rect, books: &[Book]) {
        let help_text = if self.confirm_delete {
            " Press d again to confirm delete "
        } else {
            " a Add  e Edit  d Delete  r Refresh  Enter Details  q Quit "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Books ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        if books.is_empty() {
            let empty = Paragraph::new("No books in the catalog. Press a to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = books
            .iter()
            .enumerate()
            .map(|(i, book)| {
                let year = format!("({})", book.year);
                let author = format!("by {}", book.author);

                // Layout: "  <title>  by <author>  (year)  "
                let fixed_width = author.len() + 2 + year.len() + 2;
                let title_width = inner_width.saturating_sub(fixed_width);
                let title = truncate_str(&book.title, title_width);
                let padded_title = format!("{:<width$}", title, width = title_width);

                let style = if i == self.selected {
                    if self.confirm_delete {
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    }
                } else {
                    Style::default().fg(Color::Gray)
                };

                let line = Line::from(vec![
                    Span::styled(padded_title, style),
                    Span::styled("  ", style),
                    Span::styled(author, style.add_modifier(Modifier::ITALIC)),
                    Span::styled("  ", style),
                    Span::styled(year, style),
                ]);

                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let cut: String = s.chars().take(max_width - 3).collect();
        format!("{}...", cut)
    }
}
