//! Yahoo Finance chart API client.
//!
//! Requests `/v8/finance/chart/{symbol}?range=1mo&interval=1d` and turns the
//! parallel `timestamp` / `indicators.quote[0].close` arrays into a
//! `PriceHistory`. Bars with a null close (halted or still-open sessions) are
//! skipped. Dates are taken in the exchange's local time using the `gmtoffset`
//! from the response metadata.

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use log::debug;
use reqwest::{Client, Url, header};
use serde::Deserialize;
use std::time::Duration;
use tracker_common::Symbol;
use tracker_common::history::{PriceHistory, PricePoint};

use super::{FetchError, PriceSource};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const CHART_PATH: [&str; 3] = ["v8", "finance", "chart"];
const CHART_QUERY: [(&str, &str); 2] = [("range", "1mo"), ("interval", "1d")];

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Option<Vec<QuoteColumns>>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteColumns {
    close: Option<Vec<Option<f64>>>,
}

/// Price source backed by the public Yahoo Finance chart endpoint.
pub struct YahooSource {
    client: Client,
    base_url: Url,
}

impl YahooSource {
    /// Create a client for `base_url` (e.g. `https://query1.finance.yahoo.com`).
    ///
    /// Without a `timeout` a hung upstream blocks the request indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let refused = |reason: String| FetchError::BaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| refused(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(refused("cannot carry a path".to_string()));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: parsed,
        })
    }

    /// Chart endpoint for `symbol`. The symbol is one percent-encoded path
    /// segment, so `/`, `?` or `#` in user input cannot alter the path or query.
    fn chart_url(&self, symbol: &Symbol) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(CHART_PATH)
                .push(symbol.as_str());
        }
        url.query_pairs_mut().extend_pairs(CHART_QUERY);
        url
    }

    async fn fetch(&self, symbol: &Symbol) -> Result<PriceHistory, FetchError> {
        let url = self.chart_url(symbol);
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // Unknown tickers come back as 404 with an error object in the body.
            return Err(match upstream_error(symbol, &body) {
                Some(rejected) => rejected,
                None => FetchError::Status(status.as_u16()),
            });
        }
        parse_chart(symbol, &body)
    }
}

impl PriceSource for YahooSource {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    fn monthly_closes<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> BoxFuture<'a, Result<PriceHistory, FetchError>> {
        Box::pin(self.fetch(symbol))
    }
}

fn upstream_error(symbol: &Symbol, body: &[u8]) -> Option<FetchError> {
    let envelope: ChartEnvelope = serde_json::from_slice(body).ok()?;
    envelope.chart.error.map(|e| rejected(symbol, e))
}

fn rejected(symbol: &Symbol, error: ChartError) -> FetchError {
    let description = error
        .description
        .or(error.code)
        .unwrap_or_else(|| "unknown error".to_string());
    FetchError::Rejected {
        symbol: symbol.to_string(),
        description,
    }
}

/// Decode a chart API payload into a history for `symbol`.
pub(crate) fn parse_chart(symbol: &Symbol, body: &[u8]) -> Result<PriceHistory, FetchError> {
    let envelope: ChartEnvelope = serde_json::from_slice(body)?;
    if let Some(error) = envelope.chart.error {
        return Err(rejected(symbol, error));
    }

    let Some(result) = envelope.chart.result.and_then(|mut r| r.pop()) else {
        return Err(FetchError::Empty(symbol.to_string()));
    };

    let offset = result.meta.and_then(|m| m.gmtoffset).unwrap_or(0);
    let timestamps = result.timestamp.unwrap_or_default();
    let closes = result
        .indicators
        .and_then(|i| i.quote)
        .and_then(|mut q| q.pop())
        .unwrap_or_default()
        .close
        .unwrap_or_default();

    let points: Vec<PricePoint> = timestamps
        .iter()
        .zip(closes)
        .filter_map(|(ts, close)| {
            let close = close.filter(|c| c.is_finite())?;
            let date = DateTime::<Utc>::from_timestamp(ts + offset, 0)?.date_naive();
            Some(PricePoint { date, close })
        })
        .collect();

    if points.is_empty() {
        return Err(FetchError::Empty(symbol.to_string()));
    }
    Ok(PriceHistory::new(symbol.clone(), points))
}
