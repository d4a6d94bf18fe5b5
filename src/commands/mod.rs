//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod filter;
pub mod inspect;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use filter::{execute_filter, run, to_report, validate_args};
pub use inspect::{execute_inspect, summarize_trace, TraceSummary};
pub use models::{FilterArgs, FilterOutcome};
pub use utils::{display_columns, display_version};
