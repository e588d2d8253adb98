//! Catalog API layer: wire types and the HTTP client.
//!
//! This is the only module that touches the network.

pub mod client;
pub mod types;

pub use client::{ApiError, CatalogApi, HttpCatalogClient};
pub use types::Book;
