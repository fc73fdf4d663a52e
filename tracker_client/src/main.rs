//! Tracker Client — a command-line front end for the stock tracker server. It
//! charts a symbol (printing the closing prices), saves symbols to the
//! favorites list one at a time or from a ticker file, and lists favorites.
//!
//! Usage example (CLI):
//! ```bash
//! tracker_client chart aapl
//! tracker_client save-file ./tickers.txt
//! tracker_client chart --favorite 2
//! ```
//!
//! The ticker file should contain symbols separated by commas, spaces, or new lines.
//! See `tracker_common::tickers` for details.
#![warn(missing_docs)]
mod args;
mod sender;

use crate::args::{Args, Command};
use crate::sender::TrackerClient;
use clap::Parser;
use log::{error, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracker_common::api::{ChartRequest, FavoritesResponse};
use tracker_common::figure::FigureKind;
use tracker_common::tickers::{Symbol, TickerParser};
use tracker_common::{Figure, Result, TrackerError};

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let client = TrackerClient::new(&args.server)?;
    client.health()?;
    info!("Connected to {}", args.server);

    match args.command {
        Command::Chart {
            symbol,
            favorite,
            json,
        } => {
            let favorites = match favorite {
                Some(_) => client.favorites()?.symbols(),
                None => Vec::new(),
            };
            let request = ChartRequest {
                symbol,
                n_clicks: favorite,
                favorites,
            };
            let figure = client.chart(&request)?;
            info!("Received {} chart", figure.kind());
            if json {
                println!("{}", serde_json::to_string_pretty(&figure)?);
            } else {
                for line in describe_figure(&figure) {
                    println!("{}", line);
                }
            }
        }
        Command::Save { symbol } => {
            let favorites = client.save(symbol.as_str())?;
            print_favorites(&favorites);
        }
        Command::SaveFile { path } => {
            let file_path = normalize_path(&path);
            if !is_file_exist(&file_path) {
                return Err(TrackerError::Format(format!(
                    "ticker file not found: {}",
                    file_path.display()
                )));
            }
            let symbols = Symbol::parse_from_file(BufReader::new(File::open(&file_path)?))?;
            if symbols.is_empty() {
                warn!("No tickers in {}", file_path.display());
            }
            info!("Tickers: {:?}", symbols);

            let mut favorites = FavoritesResponse::default();
            for symbol in &symbols {
                favorites = client.save(symbol.as_str())?;
            }
            print_favorites(&favorites);
        }
        Command::Favorites => print_favorites(&client.favorites()?),
    }
    Ok(())
}

/// Human-readable lines for a figure: the title, then either one
/// `date close` row per point or the on-canvas message.
fn describe_figure(figure: &Figure) -> Vec<String> {
    let mut lines = vec![figure.layout.title.text.clone()];
    match figure.kind() {
        FigureKind::Series => {
            for trace in &figure.data {
                lines.extend(
                    trace
                        .x
                        .iter()
                        .zip(&trace.y)
                        .map(|(date, close)| format!("{}  {:>10.2}", date, close)),
                );
            }
        }
        FigureKind::Placeholder | FigureKind::Error => {
            if let Some(message) = figure.message() {
                lines.push(message.to_string());
            }
        }
    }
    lines
}

fn print_favorites(favorites: &FavoritesResponse) {
    if favorites.favorites.is_empty() {
        println!("(no favorites yet)");
    }
    for (position, entry) in favorites.favorites.iter().enumerate() {
        println!("{:>3}. {}", position + 1, entry.symbol);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
