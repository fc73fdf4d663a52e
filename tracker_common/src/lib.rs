//!
//! Common types and utilities shared by the tracker server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `TrackerError` used across the workspace.
//! - `result` — handy `Result<T, TrackerError>` alias.
//! - `tickers` — ticker symbols and ticker-file parsing.
//! - `history` — daily closing prices returned by market-data sources.
//! - `figure` — Plotly chart descriptions (placeholder, series, error).
//! - `api` — JSON request/response payloads of the HTTP API.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod api;
pub mod error;
pub mod figure;
pub mod history;
pub mod net;
pub mod result;
pub mod tickers;

pub use error::TrackerError;
pub use figure::Figure;
pub use result::Result;
pub use tickers::Symbol;
