//! The filter loop: route trace lines to sinks and total their packets.
//!
//! Every sink's predicate is checked against every eligible line on its own,
//! so a line satisfying several predicates lands in all of those sinks.

use super::sink::Sink;
use crate::parser::{split_trace, TraceLine};
use crate::utils::config::MalformedPolicy;
use crate::utils::error::TraceError;
use log::{debug, warn};
use std::io::Write;

/// Counters for lines that did not simply match or miss
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    /// Data lines seen, header excluded
    pub lines_read: usize,

    /// Lines with too few fields to classify
    pub short_lines: usize,

    /// Matching lines dropped under `MalformedPolicy::Skip`
    pub malformed_skipped: usize,
}

/// Filter a whole trace, header included, into the sinks
///
/// **Public** - main entry point for in-memory filtering
///
/// The first line of `content` is the header and is never classified.
///
/// # Errors
/// * `TraceError::MalformedNumericField` - under `MalformedPolicy::Abort`
/// * `TraceError::SinkWriteFailed` - a sink writer failed
pub fn filter_trace<W: Write>(
    content: &str,
    sinks: &mut [Sink<W>],
    policy: MalformedPolicy,
) -> Result<LineStats, TraceError> {
    let (header, lines) = split_trace(content);

    if let Some(header) = header {
        debug!("Skipping header: {}", header);
    }

    filter_lines(lines, sinks, policy)
}

/// Filter already-split data lines into the sinks
///
/// **Public** - lets callers filter a partition of a trace
pub fn filter_lines<'a, W: Write>(
    lines: impl IntoIterator<Item = TraceLine<'a>>,
    sinks: &mut [Sink<W>],
    policy: MalformedPolicy,
) -> Result<LineStats, TraceError> {
    let mut stats = LineStats::default();

    for line in lines {
        stats.lines_read += 1;

        if line.is_short() {
            stats.short_lines += 1;
            continue;
        }

        // Parsed at most once, on the first matching sink
        let mut packets: Option<f64> = None;
        let mut malformed = false;

        for sink in sinks.iter_mut() {
            if !sink.matches(&line) {
                continue;
            }

            let value = match packets {
                Some(value) => value,
                None => match line.packets() {
                    Ok(value) => {
                        packets = Some(value);
                        value
                    }
                    Err(err) => match policy {
                        MalformedPolicy::Abort => return Err(err),
                        MalformedPolicy::Skip => {
                            if !malformed {
                                warn!("Skipping line: {}", err);
                                malformed = true;
                            }
                            continue;
                        }
                    },
                },
            };

            sink.accept(&line, value)?;
        }

        if malformed {
            stats.malformed_skipped += 1;
        }
    }

    debug!(
        "Filtered {} lines ({} short, {} malformed skipped)",
        stats.lines_read, stats.short_lines, stats.malformed_skipped
    );

    Ok(stats)
}
