//! Stock tracker HTTP server.
//!
//! This binary wires the building blocks from the library together:
//!
//! - `ServerConfig` — parsed from flags and `TRACKER_*` environment variables.
//! - `PriceSource` — Yahoo Finance by default, or the offline synthetic source.
//! - `AppState` — the favorites store plus the price source, shared by all handlers.
//! - The axum router — page, chart and favorites routes.
//!
//! Concurrency: requests are served on the tokio multi-threaded runtime. The
//! favorites store is the only shared mutable state and guards itself with a
//! mutex; market-data fetches are the only await points inside handlers.
use clap::Parser;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracker_server::market_data::build_source;
use tracker_server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let config = ServerConfig::parse();

    let source = build_source(&config)?;
    info!(
        "Market data provider: {} (fetch timeout: {:?})",
        config.provider,
        config.fetch_timeout()
    );

    let state = Arc::new(AppState::new(source));
    let app = router(state);

    let listener = TcpListener::bind(config.bind).await?;
    info!("Stock tracker listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
