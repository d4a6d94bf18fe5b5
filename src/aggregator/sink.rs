//! Sinks: an output stream paired with a running packet total.
//!
//! Each sink owns a predicate deciding which trace lines it takes.
//! Matching lines are copied verbatim to the writer and their packet
//! count is added to the sink's totals.

use crate::parser::TraceLine;
use crate::utils::config::{APP_FACE, APP_NODE, IN_EVENT_TYPE, OUT_EVENT_TYPE};
use crate::utils::error::TraceError;
use std::fmt;
use std::io::Write;
use std::ops::AddAssign;

/// The two sinks a filter run feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    /// InSatisfiedInterests on the application face of node 0
    In,
    /// OutInterests on the application face of node 0
    Out,
}

impl SinkKind {
    /// Event type label this sink collects
    pub fn event_type(self) -> &'static str {
        match self {
            SinkKind::In => IN_EVENT_TYPE,
            SinkKind::Out => OUT_EVENT_TYPE,
        }
    }

    /// Prefix used when the total is printed
    pub fn console_label(self) -> &'static str {
        match self {
            SinkKind::In => "InInterest",
            SinkKind::Out => "OutInterest",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::In => write!(f, "in"),
            SinkKind::Out => write!(f, "out"),
        }
    }
}

/// Conjunction of field-value conditions on a trace line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub node: String,
    pub face_descr: String,
    pub event_type: String,
}

impl Predicate {
    pub fn new(
        node: impl Into<String>,
        face_descr: impl Into<String>,
        event_type: impl Into<String>,
    ) -> Self {
        Self {
            node: node.into(),
            face_descr: face_descr.into(),
            event_type: event_type.into(),
        }
    }

    /// Standard predicate for a sink: its event type, node 0, application face
    pub fn for_sink(kind: SinkKind) -> Self {
        Self::new(APP_NODE, APP_FACE, kind.event_type())
    }

    pub fn matches(&self, line: &TraceLine<'_>) -> bool {
        line.event_type() == Some(self.event_type.as_str())
            && line.node() == Some(self.node.as_str())
            && line.face_descr() == Some(self.face_descr.as_str())
    }
}

/// Count and sum of the lines a sink accepted
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub lines: usize,
    pub sum: f64,
}

impl Totals {
    pub fn record(&mut self, packets: f64) {
        self.lines += 1;
        self.sum += packets;
    }
}

/// Merge totals from separately filtered partitions of a trace
impl AddAssign for Totals {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.sum += other.sum;
    }
}

/// An output stream with its predicate and running totals
#[derive(Debug)]
pub struct Sink<W: Write> {
    kind: SinkKind,
    predicate: Predicate,
    writer: W,
    totals: Totals,
}

impl<W: Write> Sink<W> {
    /// Create a sink using the standard predicate for `kind`
    pub fn new(kind: SinkKind, writer: W) -> Self {
        Self::with_predicate(kind, Predicate::for_sink(kind), writer)
    }

    pub fn with_predicate(kind: SinkKind, predicate: Predicate, writer: W) -> Self {
        Self {
            kind,
            predicate,
            writer,
            totals: Totals::default(),
        }
    }

    pub fn matches(&self, line: &TraceLine<'_>) -> bool {
        self.predicate.matches(line)
    }

    /// Copy a line to the writer and add its packet count
    ///
    /// # Errors
    /// * `TraceError::SinkWriteFailed` - the writer rejected the line
    pub fn accept(&mut self, line: &TraceLine<'_>, packets: f64) -> Result<(), TraceError> {
        self.writer
            .write_all(line.raw.as_bytes())
            .map_err(|source| TraceError::SinkWriteFailed {
                sink: self.kind,
                source,
            })?;

        self.totals.record(packets);
        Ok(())
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Flush the writer and hand it back with the final totals
    pub fn finish(mut self) -> Result<(Totals, W), TraceError> {
        self.writer
            .flush()
            .map_err(|source| TraceError::SinkWriteFailed {
                sink: self.kind,
                source,
            })?;

        Ok((self.totals, self.writer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(raw: &str) -> TraceLine<'_> {
        TraceLine::parse(2, raw)
    }

    #[test]
    fn test_standard_predicates() {
        let in_line = line("1\t0\t1\tappFace://\tInSatisfiedInterests\t3\n");
        let out_line = line("1\t0\t1\tappFace://\tOutInterests\t3\n");

        assert!(Predicate::for_sink(SinkKind::In).matches(&in_line));
        assert!(!Predicate::for_sink(SinkKind::In).matches(&out_line));
        assert!(Predicate::for_sink(SinkKind::Out).matches(&out_line));
        assert!(!Predicate::for_sink(SinkKind::Out).matches(&in_line));
    }

    #[test]
    fn test_predicate_requires_node_and_face() {
        let predicate = Predicate::for_sink(SinkKind::Out);

        assert!(!predicate.matches(&line("1\t1\t1\tappFace://\tOutInterests\t3\n")));
        assert!(!predicate.matches(&line("1\t0\t1\tnetDeviceFace://\tOutInterests\t3\n")));
        assert!(!predicate.matches(&line("1\t0\t1\n")));
    }

    #[test]
    fn test_accept_writes_verbatim() {
        let raw = "1\t0\t1\tappFace://\tOutInterests\t3\r\n";
        let mut sink = Sink::new(SinkKind::Out, Vec::new());

        sink.accept(&line(raw), 3.0).unwrap();
        sink.accept(&line(raw), 1.5).unwrap();

        let (totals, written) = sink.finish().unwrap();
        assert_eq!(totals, Totals { lines: 2, sum: 4.5 });
        assert_eq!(written, format!("{raw}{raw}").into_bytes());
    }

    #[test]
    fn test_totals_merge() {
        let mut first = Totals::default();
        first.record(1.0);
        first.record(2.5);

        let mut second = Totals::default();
        second.record(4.0);

        first += second;
        assert_eq!(first, Totals { lines: 3, sum: 7.5 });
    }

    #[test]
    fn test_sink_kind_labels() {
        assert_eq!(SinkKind::In.console_label(), "InInterest");
        assert_eq!(SinkKind::Out.console_label(), "OutInterest");
        assert_eq!(SinkKind::Out.to_string(), "out");
    }
}
