//! bench-summary - Benchmark Result Summarizer
//!
//! Runs a precompiled Google Benchmark executable, captures its JSON
//! output and prints a summary table grouped by container, algorithm and
//! input size.
//!
//! # Architecture
//!
//! - **Config**: command line and environment
//! - **Services**: run-or-load orchestration
//! - **Benchmark**: process invocation, summarization, rendering
//! - **Models**: report records and summary rows

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::{Summary, SummaryService};
