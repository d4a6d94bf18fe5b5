//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Splitting a rate trace into header and data lines
//! - Positional field access on each line
//! - Defining the report schema

pub mod schema;
pub mod trace_line;

// Re-export main types
pub use schema::{is_rate_trace_header, Report, SinkSummary, RATE_TRACE_COLUMNS};
pub use trace_line::{split_trace, TraceLine};
