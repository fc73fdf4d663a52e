//! Sending requests to the tracker server over HTTP.
//!
//! This module provides a small blocking client that encodes the JSON payloads
//! from `tracker_common::api` and decodes the server's answers.
use log::debug;
use reqwest::blocking::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracker_common::api::{ChartRequest, FavoritesResponse, SaveRequest};
use tracker_common::net::{CHART_PATH, FAVORITES_PATH, HEALTH_PATH};
use tracker_common::{Figure, Result, TrackerError};

/// Helper type for talking to the server.
pub struct TrackerClient {
    http: Client,
    base_url: String,
}

impl TrackerClient {
    /// Client for the server at `base_url`, e.g. `http://127.0.0.1:8050`.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder().build().map_err(request_error)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fail early when the server is not reachable.
    pub fn health(&self) -> Result<()> {
        self.http
            .get(self.url(HEALTH_PATH))
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(request_error)?;
        Ok(())
    }

    /// Request a chart figure.
    pub fn chart(&self, request: &ChartRequest) -> Result<Figure> {
        self.post(CHART_PATH, request)
    }

    /// Save `symbol` and return the updated favorites.
    pub fn save(&self, symbol: &str) -> Result<FavoritesResponse> {
        let request = SaveRequest {
            symbol: Some(symbol.to_string()),
        };
        self.post(FAVORITES_PATH, &request)
    }

    /// Current favorites.
    pub fn favorites(&self) -> Result<FavoritesResponse> {
        let url = self.url(FAVORITES_PATH);
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(request_error)?;
        response.json().map_err(request_error)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let payload = serde_json::to_vec(body)?;
        debug!("POST {} {}", url, String::from_utf8_lossy(&payload));
        let response = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(request_error)?;
        response.json().map_err(request_error)
    }
}

fn request_error(err: reqwest::Error) -> TrackerError {
    TrackerError::Request(err.to_string())
}
