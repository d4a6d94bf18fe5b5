//! Output writers for filter results.
//!
//! This module handles writing data to disk and to the console:
//! - Sink files (verbatim matching trace lines)
//! - JSON reports
//! - Console totals

pub mod console;
pub mod json;
pub mod sink_file;

// Re-export main functions
pub use console::{format_total, print_totals, render_totals};
pub use json::{read_report, write_report};
pub use sink_file::{open_sink_file, read_trace};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
