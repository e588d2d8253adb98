//! # Core Application Logic
//!
//! Business state for Shelf, independent of any UI technology.
//!
//! - [`store`]: the `CatalogStore` — in-memory book cache plus the
//!   mutators that keep it synchronized with the server.
//! - [`config`]: settings file loading and resolution.
//!
//! The store is the only component allowed to call the API client; the
//! TUI only reads snapshots and invokes store operations.

pub mod config;
pub mod store;
