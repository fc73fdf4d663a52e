//! Server configuration.
//!
//! Every option can be given as a flag or an environment variable and has a
//! default, so a bare `tracker_server` listens on `127.0.0.1:8050` and charts
//! Yahoo Finance data without any timeout.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracker_common::net::HTTP_PORT;

use crate::market_data::ProviderKind;

/// Default upstream for the Yahoo source.
pub const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Command-line and environment configuration of the server.
#[derive(Debug, Clone, Parser)]
#[command(name = "tracker_server", version, about = "Stock chart and favorites web server")]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[arg(long, env = "TRACKER_BIND", default_value_t = default_bind())]
    pub bind: SocketAddr,

    /// Market-data back end.
    #[arg(long, env = "TRACKER_PROVIDER", value_enum, default_value_t = ProviderKind::Yahoo)]
    pub provider: ProviderKind,

    /// Base URL of the Yahoo Finance chart API.
    #[arg(long, env = "TRACKER_YAHOO_URL", default_value = YAHOO_BASE_URL)]
    pub yahoo_url: String,

    /// Per-request timeout for market-data fetches, in seconds. Unset means no timeout.
    #[arg(long, env = "TRACKER_FETCH_TIMEOUT_SECS")]
    pub fetch_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Fetch timeout as a `Duration`, if configured.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), HTTP_PORT)
}
