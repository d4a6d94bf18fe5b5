//! Inspect command: summarize a trace without writing any sink.

use crate::output::read_trace;
use crate::parser::{is_rate_trace_header, split_trace};
use anyhow::{Context, Result};
use log::warn;
use std::collections::BTreeMap;
use std::path::Path;

/// What a trace contains, by event type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceSummary {
    /// Header line, without terminator
    pub header: Option<String>,

    /// Whether the header names the L3 rate trace columns
    pub rate_trace_header: bool,

    /// Data lines, header excluded
    pub lines_read: usize,

    /// Lines with too few fields to classify
    pub short_lines: usize,

    /// Line count per event type, across every node and face
    pub event_counts: BTreeMap<String, usize>,
}

/// Summarize trace content already in memory
pub fn summarize_trace(content: &str) -> TraceSummary {
    let (header, lines) = split_trace(content);

    let mut summary = TraceSummary {
        header: header.map(str::to_string),
        rate_trace_header: header.map(is_rate_trace_header).unwrap_or(false),
        ..Default::default()
    };

    for line in lines {
        summary.lines_read += 1;

        match line.event_type() {
            Some(event_type) => {
                *summary
                    .event_counts
                    .entry(event_type.trim_end().to_string())
                    .or_insert(0) += 1;
            }
            _ => summary.short_lines += 1,
        }
    }

    summary
}

/// Read a trace and print its summary
///
/// **Public** - called from main.rs
pub fn execute_inspect(input: &Path) -> Result<TraceSummary> {
    let content = read_trace(input).context("Failed to read trace")?;
    let summary = summarize_trace(&content);

    if !summary.rate_trace_header {
        warn!(
            "{} does not start with an L3 rate trace header",
            input.display()
        );
    }

    println!("Trace: {}", input.display());
    println!("  Header: {}", summary.header.as_deref().unwrap_or("<none>"));
    println!("  Data lines: {}", summary.lines_read);
    println!("  Short lines: {}", summary.short_lines);
    println!("  Event types:");
    for (event_type, count) in &summary.event_counts {
        println!("    {:<24} {}", event_type, count);
    }

    Ok(summary)
}
