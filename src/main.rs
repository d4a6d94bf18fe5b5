//! Rate Trace Filter CLI
//!
//! Reads an ndnSIM L3 rate trace, copies application-face Interest events
//! of node 0 into two sink files and prints their packet totals.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use rate_trace_filter::commands::{
    display_columns, display_version, execute_filter, execute_inspect, validate_args, FilterArgs,
};
use rate_trace_filter::utils::config::{load_config, FloatStyle, MalformedPolicy, DEFAULT_INPUT};

/// Rate Trace Filter - Interest totals from ndnSIM rate traces
#[derive(Parser, Debug)]
#[command(name = "rate-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to `filter` with default paths)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter a trace into the in/out sink files and print totals
    Filter(FilterCli),

    /// Summarize a trace by event type without writing sinks
    Inspect {
        /// Rate trace to read
        #[arg(short, long, env = "RATE_TRACE_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },

    /// Display the trace column layout
    Columns {
        /// Also show the JSON report schema
        #[arg(long)]
        report: bool,
    },

    /// Display version information
    Version,
}

/// Options of the filter command
///
/// Unset flags fall back to the config file, then to built-in defaults.
#[derive(Args, Debug, Default)]
struct FilterCli {
    /// Rate trace to read
    #[arg(short, long, env = "RATE_TRACE_INPUT")]
    input: Option<PathBuf>,

    /// Output file for InSatisfiedInterests lines
    #[arg(long)]
    in_output: Option<PathBuf>,

    /// Output file for OutInterests lines
    #[arg(long)]
    out_output: Option<PathBuf>,

    /// What to do when a matching line has an unparseable packet count
    #[arg(long, value_enum)]
    on_malformed: Option<MalformedPolicy>,

    /// Console rendering of the totals
    #[arg(long, value_enum)]
    float_style: Option<FloatStyle>,

    /// Write a JSON report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// TOML config file with input / in_sink_output / out_sink_output keys
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command.unwrap_or_else(|| Commands::Filter(FilterCli::default())) {
        Commands::Filter(options) => {
            let args = resolve_filter_args(options)?;

            // Validate args first
            validate_args(&args)?;

            execute_filter(&args)?;
        }

        Commands::Inspect { input } => {
            execute_inspect(&input)?;
        }

        Commands::Columns { report } => {
            display_columns(report);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Merge defaults, config file and CLI flags, in that order
///
/// **Private** - internal command plumbing
fn resolve_filter_args(options: FilterCli) -> Result<FilterArgs> {
    let mut args = FilterArgs::default();

    if let Some(config_path) = &options.config {
        let config = load_config(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?;
        args.apply_config(config);
    }

    if let Some(input) = options.input {
        args.input = input;
    }
    if let Some(in_output) = options.in_output {
        args.in_output = in_output;
    }
    if let Some(out_output) = options.out_output {
        args.out_output = out_output;
    }
    if let Some(policy) = options.on_malformed {
        args.on_malformed = policy;
    }
    if let Some(style) = options.float_style {
        args.float_style = style;
    }
    args.report = options.report;

    Ok(args)
}
