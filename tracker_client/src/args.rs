//! Command-line arguments for the tracker client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use tracker_common::Symbol;
use tracker_common::net::default_server_url;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the tracker server.
    #[arg(long, env = "TRACKER_SERVER", default_value_t = default_server_url())]
    pub server: String,

    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Client actions, one per server route.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the one-month closing prices of a symbol.
    Chart {
        /// Ticker symbol, sent with the casing given here.
        symbol: Option<String>,
        /// Chart the N-th favorite (1-based) instead of the typed symbol.
        #[arg(long, value_name = "N")]
        favorite: Option<u32>,
        /// Print the raw Plotly figure JSON.
        #[arg(long)]
        json: bool,
    },
    /// Save a symbol to the favorites list.
    Save {
        /// Ticker symbol; must not be blank.
        symbol: Symbol,
    },
    /// Save every symbol listed in a file.
    /// Tickers may be separated by commas, spaces, or new lines.
    SaveFile {
        /// Path to the ticker file.
        path: String,
    },
    /// List the saved favorites.
    Favorites,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_with_favorite_index() {
        let args = Args::try_parse_from(["tracker_client", "chart", "--favorite", "2"]).unwrap();
        match args.command {
            Command::Chart { symbol, favorite, json } => {
                assert_eq!(symbol, None);
                assert_eq!(favorite, Some(2));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn server_flag_overrides_default() {
        let args = Args::try_parse_from([
            "tracker_client",
            "--server",
            "http://10.0.0.5:8050",
            "save",
            "aapl",
        ])
        .unwrap();
        assert_eq!(args.server, "http://10.0.0.5:8050");
        assert!(matches!(args.command, Command::Save { symbol } if symbol.as_str() == "aapl"));
    }

    #[test]
    fn blank_save_symbol_is_rejected() {
        assert!(Args::try_parse_from(["tracker_client", "save", "  "]).is_err());
    }
}
