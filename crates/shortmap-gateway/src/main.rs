use std::sync::Arc;

use clap::Parser;
use shortmap_gateway::cli::Cli;
use shortmap_gateway::{App, AppState};
use shortmap_registry::Registry;
use shortmap_resolver::Resolver;
use shortmap_storage::SledStore;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Cli::try_parse()?;

    // Startup sequencing: open the store and load the counter before
    // the listener accepts anything. An unreadable counter aborts here.
    let store = Arc::new(SledStore::open(&config.db_dir)?);
    let registry = Arc::new(Registry::open(Arc::clone(&store)).await?);
    let resolver = Resolver::new(store);
    let state = AppState::new(registry, resolver);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        db_dir = %config.db_dir.display(),
        "starting shortmap gateway"
    );

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
