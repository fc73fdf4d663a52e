//! Offline price source.
//!
//! Produces one close per weekday over the trailing month using a small random
//! walk. The generator is seeded from the upper-cased symbol, so the same ticker
//! always charts the same series and `aapl` matches `AAPL`. Symbols with
//! characters that never appear in tickers are rejected the way an upstream
//! would reject an unknown symbol.

use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};
use futures::future::{self, BoxFuture};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracker_common::Symbol;
use tracker_common::history::{PriceHistory, PricePoint};

use super::{FetchError, PriceSource};

const WINDOW_DAYS: u64 = 30;

/// Random-walk price generator.
#[derive(Debug, Default)]
pub struct SyntheticSource {
    end_date: Option<NaiveDate>,
}

impl SyntheticSource {
    /// Source whose window ends today (UTC).
    pub fn new() -> Self {
        Self { end_date: None }
    }

    /// Source whose window ends on a fixed day.
    pub fn ending_on(end_date: NaiveDate) -> Self {
        Self {
            end_date: Some(end_date),
        }
    }

    /// Calculate the next price using a small random walk around `current_price`.
    ///
    /// The change is sampled uniformly from `[-2%, +2%]` and the result is
    /// clamped to a minimum positive value.
    pub fn next_price<R: Rng>(rng: &mut R, current_price: f64) -> f64 {
        let change: f64 = rng.random_range(-0.02..0.02);
        let new_price = current_price * (1.0 + change);
        new_price.max(0.01)
    }

    /// Build the trailing-month history for `symbol`.
    pub fn history(&self, symbol: &Symbol) -> Result<PriceHistory, FetchError> {
        if !symbol.is_well_formed() {
            return Err(FetchError::Rejected {
                symbol: symbol.to_string(),
                description: "No data found, symbol may be delisted".to_string(),
            });
        }

        let end = self.end_date.unwrap_or_else(|| Utc::now().date_naive());
        let start = end.checked_sub_days(Days::new(WINDOW_DAYS)).unwrap_or(end);

        let seed = seed_for(&symbol.to_upper());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut price = 20.0 + (seed % 480) as f64;

        let points = start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
            .map(|date| {
                price = Self::next_price(&mut rng, price);
                PricePoint {
                    date,
                    close: (price * 100.0).round() / 100.0,
                }
            })
            .collect();

        Ok(PriceHistory::new(symbol.clone(), points))
    }
}

impl PriceSource for SyntheticSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn monthly_closes<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> BoxFuture<'a, Result<PriceHistory, FetchError>> {
        Box::pin(future::ready(self.history(symbol)))
    }
}

// FNV-1a, stable across runs and platforms.
fn seed_for(symbol: &str) -> u64 {
    symbol.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Symbol {
        Symbol::parse(s).unwrap()
    }

    fn source() -> SyntheticSource {
        SyntheticSource::ending_on(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap())
    }

    #[test]
    fn produces_weekday_closes_in_window() {
        let history = source().history(&sym("AAPL")).unwrap();
        assert!(!history.is_empty());
        // 2024-05-01 .. 2024-05-31 has 23 weekdays.
        assert_eq!(history.points.len(), 23);
        assert!(history.points.iter().all(|p| p.close > 0.0));
        assert!(
            history
                .points
                .iter()
                .all(|p| !matches!(p.date.weekday(), Weekday::Sat | Weekday::Sun))
        );
        assert!(history.points.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn same_ticker_same_series_regardless_of_case() {
        let upper = source().history(&sym("AAPL")).unwrap();
        let lower = source().history(&sym("aapl")).unwrap();
        assert_eq!(upper.points, lower.points);
        assert_eq!(lower.symbol.as_str(), "aapl");

        let other = source().history(&sym("MSFT")).unwrap();
        assert_ne!(upper.points, other.points);
    }

    #[test]
    fn malformed_symbol_is_rejected() {
        assert!(matches!(
            source().history(&sym("not a ticker")),
            Err(FetchError::Rejected { .. })
        ));
    }

    #[test]
    fn next_price_stays_within_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let next = SyntheticSource::next_price(&mut rng, 100.0);
            assert!((98.0..=102.0).contains(&next));
        }
        assert_eq!(SyntheticSource::next_price(&mut rng, 0.0), 0.01);
    }
}
