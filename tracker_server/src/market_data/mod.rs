//! Market-data sources for the chart handler.
//!
//! Every source answers the same question: the trailing month of daily closes
//! for a symbol. Failures are reported as a typed [`FetchError`] so the chart
//! handler can log the cause even though the user only ever sees one message.
//!
//! - `yahoo` — Yahoo Finance chart API over HTTPS.
//! - `synthetic` — offline random-walk prices, for demos without network access.

use clap::ValueEnum;
use futures::future::BoxFuture;
use std::sync::Arc;
use strum_macros::Display;
use thiserror::Error;
use tracker_common::Symbol;
use tracker_common::history::PriceHistory;

use crate::config::ServerConfig;

pub mod synthetic;
pub mod yahoo;

pub use synthetic::SyntheticSource;
pub use yahoo::YahooSource;

/// Why a price history could not be produced.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, TLS or timeout failure while talking to the upstream.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured upstream base URL cannot carry a chart path.
    #[error("Invalid upstream URL {url}: {reason}")]
    BaseUrl {
        /// URL as configured.
        url: String,
        /// Why it was refused.
        reason: String,
    },

    /// Upstream answered with a non-success status and no explanation.
    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    /// Upstream payload could not be decoded.
    #[error("Malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Upstream reported an error for the symbol (unknown or delisted ticker, etc.).
    #[error("Upstream rejected {symbol}: {description}")]
    Rejected {
        /// Symbol as requested.
        symbol: String,
        /// Upstream description of the problem.
        description: String,
    },

    /// The request succeeded but contained no usable closes.
    #[error("No price data for {0}")]
    Empty(String),
}

/// A back end that can look up recent closing prices.
pub trait PriceSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Daily closes for the trailing month, with `symbol` passed through as typed.
    fn monthly_closes<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> BoxFuture<'a, Result<PriceHistory, FetchError>>;
}

/// Selectable market-data back ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    /// Yahoo Finance chart API.
    Yahoo,
    /// Offline random walk.
    Synthetic,
}

/// Build the source selected in `config`.
pub fn build_source(config: &ServerConfig) -> Result<Arc<dyn PriceSource>, FetchError> {
    let source: Arc<dyn PriceSource> = match config.provider {
        ProviderKind::Yahoo => Arc::new(YahooSource::new(
            &config.yahoo_url,
            config.fetch_timeout(),
        )?),
        ProviderKind::Synthetic => Arc::new(SyntheticSource::new()),
    };
    Ok(source)
}
