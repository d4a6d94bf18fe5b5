//! Rate Trace Filter
//!
//! Filters ndnSIM L3 rate traces: lines recording `InSatisfiedInterests`
//! and `OutInterests` on the application face of node 0 are copied to
//! two sink files, and their packet counts are totalled.
//!
//! This crate provides the core implementation for the
//! `rate-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! rate-trace filter --input rate-trace.txt
//! rate-trace --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
