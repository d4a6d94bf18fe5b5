//! Aggregation of trace lines into sinks.
//!
//! This module turns parsed trace lines into:
//! - Per-sink filtered output (verbatim matching lines)
//! - Per-sink running packet totals
//! - Counters for skipped lines

pub mod filter;
pub mod sink;

// Re-export main types and functions
pub use filter::{filter_lines, filter_trace, LineStats};
pub use sink::{Predicate, Sink, SinkKind, Totals};
