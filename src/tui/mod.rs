//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! view, and translates keyboard events into catalog-store operations.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Execution model
//!
//! A single synchronous event loop owns the `CatalogStore`. Every store
//! operation blocks the loop on the runtime handle until the network round
//! trip completes; there is no in-flight cancellation and no timeout
//! beyond the transport default. A failed mutation leaves the UI showing
//! pre-mutation state plus the error banner, and the user re-attempts
//! manually.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use std::time::Duration;

use log::info;

use crate::core::store::CatalogStore;
use crate::tui::component::EventHandler;
use crate::tui::components::{BookDetailState, BookFormState, BookListState, FormEvent, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// The active view. List selection survives detail/form excursions
/// because the list state lives in `TuiState`, not in the variant.
pub enum View {
    List,
    Detail(BookDetailState),
    Form(BookFormState),
}

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub view: View,
    pub list: BookListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            view: View::List,
            list: BookListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(mut store: CatalogStore, handle: tokio::runtime::Handle) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let mut terminal = ratatui::init();
    info!("TUI started with {} books", store.books.len());

    loop {
        // Keep the list selection valid against the current catalog.
        tui.list.sync(store.books.len());

        terminal.draw(|f| ui::draw_ui(f, &store, &mut tui))?;

        let Some(tui_event) = poll_event_timeout(Duration::from_millis(250)) else {
            continue;
        };

        if matches!(tui_event, TuiEvent::ForceQuit) {
            break;
        }
        if matches!(tui_event, TuiEvent::Resize) {
            continue;
        }

        // Route the event to the active view; collect the view switch (if
        // any) so the borrow of the current view ends before we replace it.
        let mut next_view: Option<View> = None;
        let mut quit = false;

        match &mut tui.view {
            View::List => {
                if let Some(list_event) = tui.list.handle_event(&tui_event) {
                    let selected = store.books.get(tui.list.selected).cloned();
                    match list_event {
                        ListEvent::Quit => quit = true,
                        ListEvent::Open => {
                            if let Some(book) = selected {
                                next_view = Some(View::Detail(BookDetailState::new(book.id)));
                            }
                        }
                        ListEvent::Create => {
                            next_view = Some(View::Form(BookFormState::create()));
                        }
                        ListEvent::Edit => {
                            if let Some(book) = selected {
                                next_view = Some(View::Form(BookFormState::edit(book)));
                            }
                        }
                        ListEvent::Delete => {
                            if let Some(book) = selected {
                                handle.block_on(store.delete_book(book.id));
                            }
                        }
                        ListEvent::Refresh => {
                            handle.block_on(store.initialize());
                        }
                    }
                }
            }
            View::Detail(detail) => match tui_event {
                TuiEvent::Escape | TuiEvent::InputChar('q') => next_view = Some(View::List),
                TuiEvent::InputChar('e') => {
                    if let Some(book) = store.book(detail.id).cloned() {
                        next_view = Some(View::Form(BookFormState::edit(book)));
                    }
                }
                _ => {}
            },
            View::Form(form) => {
                if let Some(form_event) = form.handle_event(&tui_event) {
                    match form_event {
                        FormEvent::Submit(book) => {
                            if form.is_editing() {
                                handle.block_on(store.edit_book(book));
                            } else {
                                handle.block_on(store.add_book(book));
                            }
                            next_view = Some(View::List);
                        }
                        FormEvent::Cancel => next_view = Some(View::List),
                    }
                }
            }
        }

        if quit {
            break;
        }
        if let Some(view) = next_view {
            tui.view = view;
        }
    }

    ratatui::restore();
    Ok(())
}
