//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::aggregator::SinkKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a filter run
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Input trace not found or unreadable: {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input trace {} is not UTF-8 text (invalid byte on line {line})", path.display())]
    InputNotUtf8 { path: PathBuf, line: usize },

    #[error("Cannot write output file {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: packet count {value:?} is not a number")]
    MalformedNumericField { line: usize, value: String },

    #[error("Failed to write {sink} sink: {source}")]
    SinkWriteFailed {
        sink: SinkKind,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while loading a TOML config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
