//! Stock tracker web server.
//!
//! Serves one page where a user types a ticker, sees its one-month closing
//! prices as a line chart, and keeps an in-memory list of favorite tickers.
//! The building blocks:
//!
//! - `config` — flags and environment variables (`ServerConfig`).
//! - `market_data` — `PriceSource` trait with Yahoo and synthetic back ends.
//! - `model` — the favorites store and chart-resolution logic.
//! - `routes` — axum handlers and the router; `page` holds the HTML.
//! - `error` — HTTP mapping of internal failures.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod market_data;
pub mod model;
pub mod page;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{AppState, SharedState, router};
