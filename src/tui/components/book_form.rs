//! # Book Form View
//!
//! Collects field input for create or edit. Holds transient uncommitted
//! values only; on submit it builds a `Book` and hands it to the caller,
//! which delegates to the catalog store.
//!
//! Identity rules: a create gets a freshly generated provisional id and a
//! fresh `createdAt`; an edit keeps the existing id and `createdAt`.
//! `updatedAt` is re-stamped either way. Empty optional inputs are
//! normalized to absent before the entity is built.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::api::Book;
use crate::api::types::{normalize_optional, now_timestamp, provisional_id};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const FIELD_LABELS: [&str; 7] = [
    "Title",
    "Author",
    "Year",
    "Genre",
    "ISBN",
    "Publisher",
    "Description",
];
const FIELD_COUNT: usize = FIELD_LABELS.len();

// Indices into the field array; title/author/year are the required ones.
const TITLE: usize = 0;
const AUTHOR: usize = 1;
const YEAR: usize = 2;
const GENRE: usize = 3;
const ISBN: usize = 4;
const PUBLISHER: usize = 5;
const DESCRIPTION: usize = 6;

/// Persistent state for the form view.
pub struct BookFormState {
    values: [String; FIELD_COUNT],
    focus: usize,
    /// Validation message shown under the fields, cleared on next edit.
    pub validation: Option<String>,
    /// The record being edited; `None` means the form creates a new book.
    editing: Option<Book>,
}

/// Events emitted by the form view.
#[derive(Debug, PartialEq)]
pub enum FormEvent {
    /// A valid book was built from the field values.
    Submit(Book),
    Cancel,
}

impl BookFormState {
    /// An empty form for creating a new book.
    pub fn create() -> Self {
        Self {
            values: Default::default(),
            focus: 0,
            validation: None,
            editing: None,
        }
    }

    /// A form pre-filled from an existing record.
    pub fn edit(book: Book) -> Self {
        let values = [
            book.title.clone(),
            book.author.clone(),
            book.year.to_string(),
            book.genre.clone().unwrap_or_default(),
            book.isbn.clone().unwrap_or_default(),
            book.publisher.clone().unwrap_or_default(),
            book.description.clone().unwrap_or_default(),
        ];
        Self {
            values,
            focus: 0,
            validation: None,
            editing: Some(book),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Builds the entity from current field values, or a validation
    /// message naming the first violated requirement.
    fn build_book(&self) -> Result<Book, String> {
        let title = self.values[TITLE].trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        let author = self.values[AUTHOR].trim();
        if author.is_empty() {
            return Err("Author is required".to_string());
        }
        let year: i32 = self.values[YEAR]
            .trim()
            .parse()
            .map_err(|_| "Year must be a number".to_string())?;

        let (id, created_at) = match &self.editing {
            Some(book) => (book.id, book.created_at.clone()),
            None => (provisional_id(), now_timestamp()),
        };

        Ok(Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            created_at,
            updated_at: now_timestamp(),
            deleted_at: None,
            genre: normalize_optional(&self.values[GENRE]),
            isbn: normalize_optional(&self.values[ISBN]),
            publisher: normalize_optional(&self.values[PUBLISHER]),
            description: normalize_optional(&self.values[DESCRIPTION]),
        })
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.is_editing() {
            " Edit Book "
        } else {
            " Add Book "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_bottom(Line::from(" Tab Next Field  Enter Save  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One row per field plus a trailing validation line.
        let mut constraints = vec![Constraint::Length(1); FIELD_COUNT];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        for (i, label) in FIELD_LABELS.iter().enumerate() {
            let focused = i == self.focus;
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let value_style = if focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if focused { "> " } else { "  " };

            let line = Line::from(vec![
                Span::styled(format!("{marker}{label:<12}"), label_style),
                Span::styled(self.values[i].clone(), value_style),
                Span::styled(if focused { "_" } else { "" }, value_style),
            ]);
            frame.render_widget(Paragraph::new(line), rows[i]);
        }

        if let Some(msg) = &self.validation {
            let warning = Paragraph::new(msg.as_str()).style(Style::default().fg(Color::Red));
            frame.render_widget(warning, rows[FIELD_COUNT]);
        }
    }
}

impl EventHandler for BookFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Escape => Some(FormEvent::Cancel),
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
                None
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                None
            }
            TuiEvent::InputChar(c) => {
                self.values[self.focus].push(*c);
                self.validation = None;
                None
            }
            TuiEvent::Backspace => {
                self.values[self.focus].pop();
                self.validation = None;
                None
            }
            TuiEvent::Submit => match self.build_book() {
                Ok(book) => Some(FormEvent::Submit(book)),
                Err(msg) => {
                    self.validation = Some(msg);
                    None
                }
            },
            _ => None,
        }
    }
}
