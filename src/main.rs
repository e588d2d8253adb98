mod api;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::api::HttpCatalogClient;
use crate::core::config;
use crate::core::store::CatalogStore;

#[derive(Parser)]
#[command(name = "shelf", about = "Terminal client for a book-catalog server")]
struct Args {
    /// Base URL of the catalog server (default http://localhost:8000)
    #[arg(short, long)]
    base_url: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to shelf.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("shelf.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());
    log::info!("Shelf starting up against {}", resolved.base_url);

    // The UI loop is synchronous; each store operation blocks on this
    // runtime handle for its single round trip.
    let runtime = tokio::runtime::Runtime::new()?;

    let client = Arc::new(HttpCatalogClient::new(Some(resolved.base_url)));
    let mut store = CatalogStore::new(client);
    runtime.block_on(store.initialize());

    tui::run(store, runtime.handle().clone())
}
