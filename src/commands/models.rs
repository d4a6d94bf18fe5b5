use crate::aggregator::{LineStats, Totals};
use crate::utils::config::{
    FileConfig, FloatStyle, MalformedPolicy, DEFAULT_INPUT, DEFAULT_IN_OUTPUT, DEFAULT_OUT_OUTPUT,
};
use std::path::PathBuf;

/// Arguments for the filter command
///
/// **Public** - used by main.rs to construct from CLI args and config file
#[derive(Debug, Clone, PartialEq)]
pub struct FilterArgs {
    /// Rate trace to read
    pub input: PathBuf,

    /// Output file for InSatisfiedInterests lines
    pub in_output: PathBuf,

    /// Output file for OutInterests lines
    pub out_output: PathBuf,

    /// What to do with unparseable packet counts
    pub on_malformed: MalformedPolicy,

    /// Console rendering of the totals
    pub float_style: FloatStyle,

    /// Optional JSON report path
    pub report: Option<PathBuf>,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            in_output: PathBuf::from(DEFAULT_IN_OUTPUT),
            out_output: PathBuf::from(DEFAULT_OUT_OUTPUT),
            on_malformed: MalformedPolicy::Abort,
            float_style: FloatStyle::Shortest,
            report: None,
        }
    }
}

impl FilterArgs {
    /// Overlay the keys a config file sets
    pub fn apply_config(&mut self, config: FileConfig) {
        if let Some(input) = config.input {
            self.input = input;
        }
        if let Some(in_output) = config.in_sink_output {
            self.in_output = in_output;
        }
        if let Some(out_output) = config.out_sink_output {
            self.out_output = out_output;
        }
        if let Some(policy) = config.on_malformed {
            self.on_malformed = policy;
        }
        if let Some(style) = config.float_style {
            self.float_style = style;
        }
    }
}

/// Result of one filter run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterOutcome {
    pub in_sink: Totals,
    pub out_sink: Totals,
    pub stats: LineStats,
}

impl FilterOutcome {
    pub fn in_total(&self) -> f64 {
        self.in_sink.sum
    }

    pub fn out_total(&self) -> f64 {
        self.out_sink.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial_config() {
        let mut args = FilterArgs::default();
        args.apply_config(FileConfig {
            input: Some(PathBuf::from("runs/rate-trace.txt")),
            on_malformed: Some(MalformedPolicy::Skip),
            ..Default::default()
        });

        assert_eq!(args.input, PathBuf::from("runs/rate-trace.txt"));
        assert_eq!(args.on_malformed, MalformedPolicy::Skip);
        assert_eq!(args.in_output, PathBuf::from(DEFAULT_IN_OUTPUT));
        assert_eq!(args.float_style, FloatStyle::Shortest);
    }
}
