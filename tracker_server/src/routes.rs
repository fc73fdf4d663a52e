//! HTTP routes.
//!
//! Each user action on the page maps to one request/response pair:
//!
//! | Route                  | Handler           | Response            |
//! |------------------------|-------------------|---------------------|
//! | `GET /`                | [`index`]         | HTML page           |
//! | `POST /api/chart`      | [`chart`]         | `Figure`            |
//! | `GET /api/favorites`   | [`list_favorites`]| `FavoritesResponse` |
//! | `POST /api/favorites`  | [`save_favorite`] | `FavoritesResponse` |
//! | `GET /health`          | [`health`]        | `ok`                |

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tracker_common::Figure;
use tracker_common::Symbol;
use tracker_common::api::{ChartRequest, FavoritesResponse, SaveRequest};
use tracker_common::net::{CHART_PATH, FAVORITES_PATH, HEALTH_PATH, PAGE_PATH};

use crate::error::ApiError;
use crate::market_data::PriceSource;
use crate::model::chart::update_chart;
use crate::model::favorites::FavoritesStore;
use crate::page::INDEX_HTML;

/// State shared by all handlers.
pub struct AppState {
    /// The favorites set.
    pub favorites: FavoritesStore,
    /// Market-data back end.
    pub source: Arc<dyn PriceSource>,
}

impl AppState {
    /// State with an empty favorites set.
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self {
            favorites: FavoritesStore::new(),
            source,
        }
    }
}

/// Handle to the shared state.
pub type SharedState = Arc<AppState>;

/// Build the application router.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route(PAGE_PATH, get(index))
        .route(CHART_PATH, post(chart))
        .route(FAVORITES_PATH, get(list_favorites).post(save_favorite))
        .route(HEALTH_PATH, get(health))
        .with_state(state)
}

/// Serve the page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Chart update handler. Always answers with a figure.
pub async fn chart(
    State(state): State<SharedState>,
    Json(request): Json<ChartRequest>,
) -> Json<Figure> {
    let outcome = update_chart(state.source.as_ref(), &request).await;
    Json(outcome.into_figure())
}

/// Current favorites, without changing them.
pub async fn list_favorites(
    State(state): State<SharedState>,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let symbols = state.favorites.list()?;
    Ok(Json(FavoritesResponse::render(&symbols)))
}

/// Favorites save handler. Blank input leaves the set unchanged.
pub async fn save_favorite(
    State(state): State<SharedState>,
    Json(request): Json<SaveRequest>,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let symbols = match Symbol::from_input(request.symbol.as_deref()) {
        Some(symbol) => state.favorites.add(&symbol)?,
        None => state.favorites.list()?,
    };
    Ok(Json(FavoritesResponse::render(&symbols)))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
