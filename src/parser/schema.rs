//! Input column layout and output report schema.
//!
//! The report is the JSON file written by `--report`.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Column names of an ndnSIM L3 rate trace, in order
pub const RATE_TRACE_COLUMNS: &[&str] = &[
    "Time",
    "Node",
    "FaceId",
    "FaceDescr",
    "Type",
    "Packets",
    "Kilobytes",
    "PacketRaw",
    "KilobytesRaw",
];

/// Short descriptions for `RATE_TRACE_COLUMNS`, same order
pub const RATE_TRACE_COLUMN_NOTES: &[&str] = &[
    "simulation time in seconds",
    "node id (must be \"0\" to match)",
    "face id",
    "face description (must be \"appFace://\" to match)",
    "event type (InSatisfiedInterests -> in sink, OutInterests -> out sink)",
    "packet count, summed into the sink total",
    "kilobytes",
    "raw packet count",
    "raw kilobytes",
];

/// Check whether a header row names the rate trace columns
///
/// Only the leading columns the filter relies on are compared.
pub fn is_rate_trace_header(header: &str) -> bool {
    let names: Vec<&str> = header.split('\t').map(str::trim).collect();

    names.len() >= 6
        && names
            .iter()
            .zip(RATE_TRACE_COLUMNS)
            .take(6)
            .all(|(got, want)| got == want)
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace that was filtered
    pub input: PathBuf,

    /// Summary of the InSatisfiedInterests sink
    pub in_sink: SinkSummary,

    /// Summary of the OutInterests sink
    pub out_sink: SinkSummary,

    /// Data lines read (header excluded)
    pub lines_read: usize,

    /// Lines with too few fields to classify
    pub short_lines: usize,

    /// Matching lines dropped because the packet count did not parse
    pub malformed_skipped: usize,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl Report {
    pub fn in_total(&self) -> f64 {
        self.in_sink.total
    }

    pub fn out_total(&self) -> f64 {
        self.out_sink.total
    }
}

/// Per-sink part of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinkSummary {
    /// Event type routed to this sink
    pub event_type: String,

    /// File the matching lines were written to
    pub output: PathBuf,

    /// Number of lines written
    pub lines: usize,

    /// Sum of their packet counts
    pub total: f64,
}
