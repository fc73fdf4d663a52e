//! Chart update logic: pick the symbol to chart, fetch it, choose a figure.

use log::{debug, warn};
use tracker_common::Figure;
use tracker_common::Symbol;
use tracker_common::api::ChartRequest;
use tracker_common::history::PriceHistory;

use crate::market_data::{FetchError, PriceSource};

/// Result of one chart request, before it is rendered.
#[derive(Debug)]
pub enum ChartOutcome {
    /// Nothing to chart yet.
    Placeholder,
    /// Closing prices for the resolved symbol.
    Series(PriceHistory),
    /// The fetch failed; the cause is kept for logging.
    Failed(FetchError),
}

impl ChartOutcome {
    /// Render the outcome. Every failure shares one user-facing figure.
    pub fn into_figure(self) -> Figure {
        match self {
            ChartOutcome::Placeholder => Figure::placeholder(),
            ChartOutcome::Series(history) => Figure::price_history(&history),
            ChartOutcome::Failed(_) => Figure::fetch_error(),
        }
    }
}

/// Decide which symbol a request refers to.
///
/// A non-zero click count selects `favorites[n_clicks - 1]` and wins over the
/// typed text. Counts past the end of the rendered list fall back to the text.
pub fn resolve_symbol(request: &ChartRequest) -> Option<Symbol> {
    if let Some(clicks) = request.n_clicks.filter(|n| *n > 0) {
        if !request.favorites.is_empty() {
            match request.favorites.get(clicks as usize - 1) {
                Some(favorite) => return Symbol::parse(favorite),
                None => warn!(
                    "Favorites click {} is past the {} rendered entries; using typed symbol",
                    clicks,
                    request.favorites.len()
                ),
            }
        }
    }
    Symbol::from_input(request.symbol.as_deref())
}

/// Resolve, fetch and classify one chart request.
pub async fn update_chart(source: &dyn PriceSource, request: &ChartRequest) -> ChartOutcome {
    let Some(symbol) = resolve_symbol(request) else {
        debug!("No symbol resolved; rendering placeholder");
        return ChartOutcome::Placeholder;
    };

    debug!("Charting {} via {}", symbol, source.name());
    match source.monthly_closes(&symbol).await {
        Ok(history) if history.is_empty() => {
            let err = FetchError::Empty(symbol.to_string());
            warn!("Chart fetch for {} failed: {}", symbol, err);
            ChartOutcome::Failed(err)
        }
        Ok(history) => {
            debug!(
                "{} closes for {}, last {:?}",
                history.points.len(),
                symbol,
                history.last_close()
            );
            ChartOutcome::Series(history)
        }
        Err(err) => {
            warn!("Chart fetch for {} failed: {}", symbol, err);
            ChartOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::SyntheticSource;
    use chrono::NaiveDate;
    use tracker_common::figure::{ERROR_MESSAGE, FigureKind, PLACEHOLDER_HINT};

    fn request(symbol: Option<&str>, n_clicks: Option<u32>, favorites: &[&str]) -> ChartRequest {
        ChartRequest {
            symbol: symbol.map(str::to_string),
            n_clicks,
            favorites: favorites.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn resolved(req: &ChartRequest) -> Option<String> {
        resolve_symbol(req).map(|s| s.as_str().to_string())
    }

    #[test]
    fn typed_symbol_is_used_without_clicks() {
        assert_eq!(resolved(&request(Some("aapl"), None, &[])), Some("aapl".into()));
        assert_eq!(
            resolved(&request(Some("aapl"), Some(0), &["TSLA"])),
            Some("aapl".into())
        );
    }

    #[test]
    fn click_selects_favorite_over_typed_text() {
        let req = request(Some("aapl"), Some(2), &["TSLA", "MSFT", "GOOG"]);
        assert_eq!(resolved(&req), Some("MSFT".into()));

        let req = request(None, Some(1), &["TSLA"]);
        assert_eq!(resolved(&req), Some("TSLA".into()));
    }

    #[test]
    fn click_without_rendered_favorites_uses_text() {
        assert_eq!(resolved(&request(Some("nvda"), Some(3), &[])), Some("nvda".into()));
    }

    #[test]
    fn click_past_end_falls_back_to_text() {
        assert_eq!(
            resolved(&request(Some("nvda"), Some(5), &["TSLA"])),
            Some("nvda".into())
        );
        assert_eq!(resolved(&request(None, Some(5), &["TSLA"])), None);
    }

    #[test]
    fn blank_text_resolves_to_nothing() {
        assert_eq!(resolved(&request(None, None, &[])), None);
        assert_eq!(resolved(&request(Some("   "), None, &[])), None);
    }

    #[tokio::test]
    async fn no_symbol_gives_placeholder() {
        let source = SyntheticSource::new();
        let outcome = update_chart(&source, &ChartRequest::default()).await;
        assert!(matches!(outcome, ChartOutcome::Placeholder));
        let figure = outcome.into_figure();
        assert_eq!(figure.kind(), FigureKind::Placeholder);
        assert_eq!(figure.message(), Some(PLACEHOLDER_HINT));
    }

    #[tokio::test]
    async fn series_is_titled_with_upper_case_symbol() {
        let source = SyntheticSource::ending_on(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
        let outcome = update_chart(&source, &ChartRequest::for_symbol("aapl")).await;
        let figure = outcome.into_figure();
        assert_eq!(figure.kind(), FigureKind::Series);
        assert_eq!(figure.layout.title.text, "AAPL Stock Prices (Last 1 Month)");
    }

    #[tokio::test]
    async fn fetch_failure_gives_error_figure() {
        let source = SyntheticSource::new();
        let outcome = update_chart(&source, &ChartRequest::for_symbol("no such thing")).await;
        assert!(matches!(outcome, ChartOutcome::Failed(FetchError::Rejected { .. })));
        let figure = outcome.into_figure();
        assert_eq!(figure.kind(), FigureKind::Error);
        assert_eq!(figure.message(), Some(ERROR_MESSAGE));
    }
}
