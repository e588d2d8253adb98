//! # TUI Components
//!
//! One file per view, each self-contained: state type, event type,
//! rendering, event handling, and tests live together.
//!
//! Views follow the persistent-state pattern: the state struct lives in
//! `TuiState` for the lifetime of the view and renders from the catalog
//! snapshot passed in as a prop each frame. Data flows in as parameters,
//! never from globals, so every view is testable in isolation.

pub mod book_detail;
pub mod book_form;
pub mod book_list;

pub use book_detail::BookDetailState;
pub use book_form::{BookFormState, FormEvent};
pub use book_list::{BookListState, ListEvent};
