//! In-memory favorites set.
//!
//! The store keeps the saved tickers for the lifetime of the process. It exposes
//! two operations:
//!
//! - `FavoritesStore::list()` — snapshot of all favorites in insertion order.
//! - `FavoritesStore::add(symbol)` — append the upper-cased symbol unless it is
//!   already present, then return the updated snapshot.
//!
//! Design notes:
//! - Entries are only ever appended, never removed or reordered. The chart
//!   handler resolves list clicks by position and relies on that.
//! - The sequence lives behind a `Mutex`, so the read-then-append in `add` is a
//!   single critical section even when handlers run on several worker threads.

use log::info;
use std::sync::Mutex;
use tracker_common::{Result, Symbol};

/// Process-wide, insertion-ordered set of upper-case tickers.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    symbols: Mutex<Vec<String>>,
}

impl FavoritesStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the favorites in insertion order.
    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self.symbols.lock()?.clone())
    }

    /// Append `symbol` (upper-cased) if absent and return the updated snapshot.
    pub fn add(&self, symbol: &Symbol) -> Result<Vec<String>> {
        let upper = symbol.to_upper();
        let mut symbols = self.symbols.lock()?;
        if !symbols.contains(&upper) {
            info!("Added {} to favorites ({} total)", upper, symbols.len() + 1);
            symbols.push(upper);
        }
        Ok(symbols.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn sym(s: &str) -> Symbol {
        Symbol::parse(s).unwrap()
    }

    #[test]
    fn add_upper_cases_and_deduplicates() {
        let store = FavoritesStore::new();
        store.add(&sym("aapl")).unwrap();
        store.add(&sym("AAPL")).unwrap();
        let list = store.add(&sym("Aapl")).unwrap();
        assert_eq!(list, vec!["AAPL"]);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = FavoritesStore::new();
        for s in ["tsla", "aapl", "msft", "aapl"] {
            store.add(&sym(s)).unwrap();
        }
        assert_eq!(store.list().unwrap(), vec!["TSLA", "AAPL", "MSFT"]);
    }

    #[test]
    fn new_store_is_empty() {
        let store = FavoritesStore::new();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn concurrent_adds_never_duplicate() {
        let store = Arc::new(FavoritesStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for s in ["aapl", "msft", "goog"] {
                        store.add(&sym(s)).unwrap();
                    }
                    store.add(&sym(&format!("t{}", i))).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let list = store.list().unwrap();
        let unique: HashSet<&String> = list.iter().collect();
        assert_eq!(unique.len(), list.len());
        assert_eq!(list.len(), 11);
    }

    #[quickcheck]
    fn saving_twice_keeps_one_entry(raw: String) -> bool {
        let Some(symbol) = Symbol::parse(&raw) else {
            return true;
        };
        let store = FavoritesStore::new();
        store.add(&symbol).unwrap();
        let list = store.add(&symbol).unwrap();
        list.iter().filter(|s| **s == symbol.to_upper()).count() == 1
    }

    #[quickcheck]
    fn distinct_symbols_keep_save_order(raw: Vec<String>) -> bool {
        let mut expected: Vec<String> = Vec::new();
        let store = FavoritesStore::new();
        for symbol in raw.iter().filter_map(|s| Symbol::parse(s)) {
            let upper = symbol.to_upper();
            if !expected.contains(&upper) {
                expected.push(upper);
            }
            store.add(&symbol).unwrap();
        }
        store.list().unwrap() == expected
    }
}
