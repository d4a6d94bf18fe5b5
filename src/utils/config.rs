//! Configuration and constants for the CLI.

use crate::utils::error::ConfigError;
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Default paths, matching the file names the tool has always used
pub const DEFAULT_INPUT: &str = "rate-trace.txt";
pub const DEFAULT_IN_OUTPUT: &str = "drop-rate-120mps-in.txt";
pub const DEFAULT_OUT_OUTPUT: &str = "drop-rate-120mps-out.txt";

// Column positions in an L3 rate trace row (0-based)
pub const NODE_COLUMN: usize = 1;
pub const FACE_DESCR_COLUMN: usize = 3;
pub const TYPE_COLUMN: usize = 4;
pub const PACKETS_COLUMN: usize = 5;

/// A row needs at least this many fields to be considered at all
pub const MIN_FIELDS: usize = TYPE_COLUMN + 1;

// Values both predicates require
pub const APP_NODE: &str = "0";
pub const APP_FACE: &str = "appFace://";

// Event labels routed to the two sinks
pub const IN_EVENT_TYPE: &str = "InSatisfiedInterests";
pub const OUT_EVENT_TYPE: &str = "OutInterests";

/// Significant digits used by the legacy console rendering
pub const LEGACY_SIGNIFICANT_DIGITS: usize = 12;

/// What to do with a matching line whose packet count does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole run
    #[default]
    Abort,
    /// Log a warning, leave the line out of output and totals
    Skip,
}

/// How totals are rendered on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatStyle {
    /// Shortest round-trip form, always with a decimal point
    #[default]
    Shortest,
    /// 12 significant digits, as older runs printed
    Legacy,
}

/// Options recognized in a TOML config file
///
/// Every key is optional; missing keys fall back to CLI flags or defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub in_sink_output: Option<PathBuf>,
    pub out_sink_output: Option<PathBuf>,
    pub on_malformed: Option<MalformedPolicy>,
    pub float_style: Option<FloatStyle>,
}

/// Load a TOML config file
///
/// **Public** - used by main.rs when `--config` is given
///
/// # Errors
/// * `ConfigError::ReadFailed` - file missing or unreadable
/// * `ConfigError::InvalidToml` - bad syntax, wrong types or unknown keys
pub fn load_config(path: impl AsRef<Path>) -> Result<FileConfig, ConfigError> {
    let path = path.as_ref();

    debug!("Loading config from: {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| ConfigError::InvalidToml {
        path: path.to_path_buf(),
        source,
    })
}
