//! JSON payloads exchanged between the page/CLI and the server.
//!
//! A `ChartRequest` carries everything the chart handler needs: the typed
//! symbol, the click count of the favorites list, and the favorites as they
//! are currently rendered. Favorites responses list every entry together with
//! its positional element id.
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chart`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Free text from the symbol input, if any.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Cumulative click count of the favorites list.
    #[serde(default)]
    pub n_clicks: Option<u32>,
    /// Favorites as rendered on the page, in display order.
    #[serde(default)]
    pub favorites: Vec<String>,
}

impl ChartRequest {
    /// Request for a typed symbol only.
    pub fn for_symbol(symbol: &str) -> Self {
        ChartRequest {
            symbol: Some(symbol.to_string()),
            ..ChartRequest::default()
        }
    }
}

/// Body of `POST /api/favorites`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Free text from the symbol input, if any.
    #[serde(default)]
    pub symbol: Option<String>,
}

/// One rendered favorites entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Positional element id, `favorite-<index>`.
    pub id: String,
    /// Upper-cased ticker.
    pub symbol: String,
}

/// Response of both favorites routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesResponse {
    /// Favorites in insertion order.
    pub favorites: Vec<FavoriteEntry>,
}

impl FavoritesResponse {
    /// Renders an ordered list of tickers with positional ids.
    pub fn render<S: AsRef<str>>(symbols: &[S]) -> Self {
        let favorites = symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| FavoriteEntry {
                id: format!("favorite-{}", i),
                symbol: symbol.as_ref().to_string(),
            })
            .collect();
        FavoritesResponse { favorites }
    }

    /// Tickers only, in display order.
    pub fn symbols(&self) -> Vec<String> {
        self.favorites.iter().map(|f| f.symbol.clone()).collect()
    }
}
