use crate::parser::schema::{RATE_TRACE_COLUMNS, RATE_TRACE_COLUMN_NOTES};
use crate::utils::config::{APP_FACE, APP_NODE, IN_EVENT_TYPE, OUT_EVENT_TYPE, SCHEMA_VERSION};

/// Display the input column layout and the sink predicates
pub fn display_columns(show_report: bool) {
    println!("L3 Rate Trace Columns (tab-separated, first line is a header)");
    println!();

    for (index, (name, note)) in RATE_TRACE_COLUMNS
        .iter()
        .zip(RATE_TRACE_COLUMN_NOTES)
        .enumerate()
    {
        println!("  [{}] {:<13} - {}", index, name, note);
    }

    println!();
    println!("Sinks:");
    println!("  in:  Type == {IN_EVENT_TYPE}, Node == {APP_NODE}, FaceDescr == {APP_FACE}");
    println!("  out: Type == {OUT_EVENT_TYPE}, Node == {APP_NODE}, FaceDescr == {APP_FACE}");

    if show_report {
        println!();
        println!("Report Schema (v{}):", SCHEMA_VERSION);
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  input: string              - Trace that was filtered");
        println!("  in_sink / out_sink: object - Per-sink results");
        println!("    event_type: string       - Event type routed to the sink");
        println!("    output: string           - File the lines were written to");
        println!("    lines: number            - Lines written");
        println!("    total: number            - Sum of their packet counts");
        println!("  lines_read: number         - Data lines read (header excluded)");
        println!("  short_lines: number        - Lines with fewer than 5 fields");
        println!("  malformed_skipped: number  - Lines dropped under --on-malformed skip");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!();
        println!("Use --report for the JSON report schema");
    }
}

/// Display version information
pub fn display_version() {
    println!("Rate Trace Filter v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Filters ndnSIM L3 rate traces and totals application-face Interests.");
}
