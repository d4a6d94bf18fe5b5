//! File plumbing for a filter run: reading the trace, opening the sinks.

use crate::utils::error::TraceError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Read a whole trace file into memory
///
/// **Public** - the input is always read before any sink is opened
///
/// # Errors
/// * `TraceError::InputNotFound` - missing or unreadable
/// * `TraceError::InputNotUtf8` - contains bytes that are not UTF-8
pub fn read_trace(input_path: impl AsRef<Path>) -> Result<String, TraceError> {
    let input_path = input_path.as_ref();

    info!("Reading trace: {}", input_path.display());

    let bytes = std::fs::read(input_path).map_err(|source| TraceError::InputNotFound {
        path: input_path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|err| {
        let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
        TraceError::InputNotUtf8 {
            path: input_path.to_path_buf(),
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;

    debug!("Trace loaded ({} bytes)", content.len());

    Ok(content)
}

/// Create (or truncate) a sink output file
///
/// Parent directories are not created; a missing parent is an error.
///
/// # Errors
/// * `TraceError::OutputUnwritable` - the file cannot be created
pub fn open_sink_file(output_path: impl AsRef<Path>) -> Result<BufWriter<File>, TraceError> {
    let output_path = output_path.as_ref();

    debug!("Opening sink file: {}", output_path.display());

    let file = File::create(output_path).map_err(|source| TraceError::OutputUnwritable {
        path: output_path.to_path_buf(),
        source,
    })?;

    Ok(BufWriter::new(file))
}
