//! Domain models for the tracker server.
//!
//! - `favorites` — the process-wide, append-only favorites set.
//! - `chart` — symbol resolution and the chart outcome behind each figure.

pub mod chart;
pub mod favorites;
