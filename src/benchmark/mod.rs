//! Benchmark execution and summarization
//!
//! - **Runner** (`runner.rs`): invokes the benchmark executable once and
//!   loads the JSON report it writes to a transient file.
//! - **Metrics** (`metrics.rs`): filters, parses and orders the reported
//!   records into summary rows.
//! - **Report** (`report.rs`): renders the rows as a text table or JSON.

pub mod metrics;
pub mod report;
pub mod runner;

pub use metrics::summarize;
pub use report::{OutputFormat, print_summary};
pub use runner::{BenchmarkRunner, RunOutcome, load_report};
