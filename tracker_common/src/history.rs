//! Daily closing-price history returned by a market-data source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tickers::Symbol;

/// Closing price of one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day.
    pub date: NaiveDate,
    /// Last traded price of the day, in USD.
    pub close: f64,
}

/// Trailing window of daily closes for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Symbol exactly as it was requested.
    pub symbol: Symbol,
    /// Points ordered by ascending date.
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Builds a history, sorting the points by date.
    pub fn new(symbol: Symbol, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { symbol, points }
    }

    /// `true` when the source returned no usable closes.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent close, if any.
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }
}
