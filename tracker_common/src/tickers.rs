//! Ticker symbols and helpers shared between client and server.
//!
//! A `Symbol` keeps the text exactly as the user typed it (minus surrounding
//! whitespace). Market-data lookups use that text verbatim, while titles and
//! favorites use the upper-cased form from [`Symbol::to_upper`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::TrackerError;

/// Trait providing file parsing for tickers.
pub trait TickerParser {
    /// Parses tickers from a buffered reader.
    ///
    /// Symbols may be separated by commas, whitespace or new lines. Empty
    /// tokens are skipped. Returns an error if any token contains characters
    /// that cannot appear in a ticker.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Symbol>, TrackerError>;
}

impl TickerParser for Symbol {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, TrackerError> {
        let mut symbols = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(TrackerError::Io)?;
            for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if token.is_empty() {
                    continue;
                }
                if !is_well_formed(token) {
                    return Err(TrackerError::ParseTickersFile(format!(
                        "unexpected characters in {:?}",
                        token
                    )));
                }
                symbols.push(Symbol(token.to_string()));
            }
        }
        Ok(symbols)
    }
}

// Exchange suffixes and index/futures markers: BRK.B, ^GSPC, ES=F, BTC-USD.
fn is_well_formed(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='))
}

/// A non-empty ticker symbol as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Builds a symbol from free text, or `None` when the text is blank.
    pub fn parse(raw: &str) -> Option<Symbol> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Symbol(trimmed.to_string()))
        }
    }

    /// Builds a symbol from optional free text (an absent input field).
    pub fn from_input(raw: Option<&str>) -> Option<Symbol> {
        raw.and_then(Symbol::parse)
    }

    /// The symbol with its original casing.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the symbol only uses characters that appear in tickers.
    pub fn is_well_formed(&self) -> bool {
        is_well_formed(&self.0)
    }

    /// Upper-cased form used for display and for the favorites set.
    pub fn to_upper(&self) -> String {
        self.0.to_uppercase()
    }
}

impl FromStr for Symbol {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::parse(s).ok_or_else(|| TrackerError::InvalidSymbol(s.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
