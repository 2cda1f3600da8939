//! Remit Service
//!
//! Core aggregation logic: concurrent fan-out over the adapter registry,
//! deterministic batch assembly, display ranking, and refresh-generation
//! tracking for stale-result supersession.

pub mod aggregator;
pub mod ranking;
pub mod refresh;

pub use aggregator::{AggregatorError, AggregatorService};
pub use ranking::rank;
pub use refresh::RefreshTracker;
