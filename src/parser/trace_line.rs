//! Line-level parsing of L3 rate traces.
//!
//! A trace is read whole, then split into lines that keep their original
//! terminators so matching lines can be copied to the sinks byte-for-byte.
//! Fields are split on tabs with the terminator still attached, so the last
//! field of a row carries it. A five-field row ending in a newline therefore
//! has an event type of `"OutInterests\n"` and matches no sink.

use crate::utils::config::{
    FACE_DESCR_COLUMN, MIN_FIELDS, NODE_COLUMN, PACKETS_COLUMN, TYPE_COLUMN,
};
use crate::utils::error::TraceError;

/// One data row of a rate trace
#[derive(Debug, Clone, PartialEq)]
pub struct TraceLine<'a> {
    /// 1-based line number in the input file (the header is line 1)
    pub number: usize,

    /// The line exactly as read, including its terminator
    pub raw: &'a str,

    fields: Vec<&'a str>,
}

impl<'a> TraceLine<'a> {
    /// Split a raw line into its tab-separated fields
    pub fn parse(number: usize, raw: &'a str) -> Self {
        let fields = raw.split('\t').collect();
        Self { number, raw, fields }
    }

    /// Field at a 0-based column, if the row has it
    pub fn field(&self, column: usize) -> Option<&'a str> {
        self.fields.get(column).copied()
    }

    /// Rows without an event-type column are skipped without complaint
    pub fn is_short(&self) -> bool {
        self.fields.len() < MIN_FIELDS
    }

    pub fn node(&self) -> Option<&'a str> {
        self.field(NODE_COLUMN)
    }

    pub fn face_descr(&self) -> Option<&'a str> {
        self.field(FACE_DESCR_COLUMN)
    }

    pub fn event_type(&self) -> Option<&'a str> {
        self.field(TYPE_COLUMN)
    }

    /// Parse the packet count column as `f64`
    ///
    /// Surrounding whitespace is ignored. A missing column is reported the
    /// same way as an unparseable one.
    ///
    /// # Errors
    /// * `TraceError::MalformedNumericField` - column absent or not a number
    pub fn packets(&self) -> Result<f64, TraceError> {
        let value = self.field(PACKETS_COLUMN).unwrap_or("").trim();

        value
            .parse::<f64>()
            .map_err(|_| TraceError::MalformedNumericField {
                line: self.number,
                value: value.to_string(),
            })
    }
}

/// Split trace content into its header and the data lines after it
///
/// **Public** - entry point used by the filter and by `inspect`
///
/// # Returns
/// The header line (without terminator), if the content has one, and an
/// iterator over every following line, numbered from 2.
pub fn split_trace(content: &str) -> (Option<&str>, impl Iterator<Item = TraceLine<'_>>) {
    let mut lines = content.split_inclusive('\n');
    let header = lines.next().map(strip_terminator);

    let data = lines
        .enumerate()
        .map(|(index, raw)| TraceLine::parse(index + 2, raw));

    (header, data)
}

/// Drop a trailing `\n` or `\r\n`
fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}
