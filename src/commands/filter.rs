//! Filter command implementation.
//!
//! The filter command:
//! 1. Reads the whole trace
//! 2. Opens (truncates) both sink files
//! 3. Routes matching lines to the sinks and totals their packets
//! 4. Writes the optional JSON report
//! 5. Prints both totals

use crate::aggregator::{filter_trace, Sink, SinkKind};
use crate::commands::models::{FilterArgs, FilterOutcome};
use crate::output::{open_sink_file, print_totals, read_trace, write_report};
use crate::parser::{Report, SinkSummary};
use crate::utils::config::{MalformedPolicy, SCHEMA_VERSION};
use crate::utils::error::TraceError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Execute the filter command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is printed unless the whole run, report included, succeeds.
///
/// # Errors
/// * Input missing or unreadable
/// * Sink or report file not writable
/// * Unparseable packet count under `MalformedPolicy::Abort`
pub fn execute_filter(args: &FilterArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Filtering trace: {}", args.input.display());
    debug!(
        "Sinks: in -> {}, out -> {}",
        args.in_output.display(),
        args.out_output.display()
    );

    let outcome = run(
        &args.input,
        &args.in_output,
        &args.out_output,
        args.on_malformed,
    )
    .context("Filter run failed")?;

    info!(
        "✓ {} lines written to: {}",
        outcome.in_sink.lines,
        args.in_output.display()
    );
    info!(
        "✓ {} lines written to: {}",
        outcome.out_sink.lines,
        args.out_output.display()
    );

    let report = to_report(args, &outcome);

    if let Some(report_path) = &args.report {
        write_report(&report, report_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", report_path.display());
    }

    print_totals(outcome.in_total(), outcome.out_total(), args.float_style);

    let elapsed = start_time.elapsed();
    info!("Filter completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Filter one trace into two sink files
///
/// **Public** - the library-level run, without printing or reporting
///
/// The input is read in full before either sink file is created, so a
/// missing input leaves existing outputs untouched.
///
/// # Errors
/// * `TraceError::InputNotFound`
/// * `TraceError::OutputUnwritable` - on open, write or flush of a sink
/// * `TraceError::MalformedNumericField` - under `MalformedPolicy::Abort`
pub fn run(
    input: &Path,
    in_output: &Path,
    out_output: &Path,
    policy: MalformedPolicy,
) -> Result<FilterOutcome, TraceError> {
    let content = read_trace(input)?;

    let mut sinks = [
        Sink::new(SinkKind::In, open_sink_file(in_output)?),
        Sink::new(SinkKind::Out, open_sink_file(out_output)?),
    ];

    let sink_path = |kind: SinkKind| match kind {
        SinkKind::In => in_output.to_path_buf(),
        SinkKind::Out => out_output.to_path_buf(),
    };
    let with_path = |err: TraceError| match err {
        TraceError::SinkWriteFailed { sink, source } => TraceError::OutputUnwritable {
            path: sink_path(sink),
            source,
        },
        other => other,
    };

    let stats = filter_trace(&content, &mut sinks, policy).map_err(with_path)?;

    let [in_sink, out_sink] = sinks;
    let (in_totals, _) = in_sink.finish().map_err(with_path)?;
    let (out_totals, _) = out_sink.finish().map_err(with_path)?;

    Ok(FilterOutcome {
        in_sink: in_totals,
        out_sink: out_totals,
        stats,
    })
}

/// Build the report for a finished run
pub fn to_report(args: &FilterArgs, outcome: &FilterOutcome) -> Report {
    Report {
        version: SCHEMA_VERSION.to_string(),
        input: args.input.clone(),
        in_sink: SinkSummary {
            event_type: SinkKind::In.event_type().to_string(),
            output: args.in_output.clone(),
            lines: outcome.in_sink.lines,
            total: outcome.in_sink.sum,
        },
        out_sink: SinkSummary {
            event_type: SinkKind::Out.event_type().to_string(),
            output: args.out_output.clone(),
            lines: outcome.out_sink.lines,
            total: outcome.out_sink.sum,
        },
        lines_read: outcome.stats.lines_read,
        short_lines: outcome.stats.short_lines,
        malformed_skipped: outcome.stats.malformed_skipped,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Validate filter arguments
///
/// **Public** - can be called before execute_filter for early validation
pub fn validate_args(args: &FilterArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.in_output.as_os_str().is_empty() || args.out_output.as_os_str().is_empty() {
        anyhow::bail!("Output paths cannot be empty");
    }

    if args.in_output == args.out_output {
        anyhow::bail!(
            "In and out sinks must be different files (both are {})",
            args.in_output.display()
        );
    }

    if args.in_output == args.input || args.out_output == args.input {
        anyhow::bail!(
            "An output path is the same as the input trace: {}",
            args.input.display()
        );
    }

    if let Some(report) = &args.report {
        if report == &args.in_output || report == &args.out_output || report == &args.input {
            anyhow::bail!("Report path collides with another file: {}", report.display());
        }
    }

    Ok(())
}
