//! Application configuration management
//!
//! Configuration comes from command-line flags, each of which falls back to
//! an environment variable (a `.env` file is honoured). It is loaded once at
//! startup and validated before any process is launched.

use std::env;
use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};

use crate::benchmark::report::OutputFormat;
use crate::constants::{DEFAULT_BINARY_PATH, DEFAULT_LOG_FILTER, DEFAULT_MIN_TIME};
use crate::error::{AppError, AppResult};
use crate::utils::{sanitize_string, validate_min_time};

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "bench-summary")]
#[command(about = "Run a Google Benchmark executable and summarize its results")]
#[command(version)]
pub struct Cli {
    /// Path to the compiled benchmark binary
    #[arg(long, env = "BENCH_BINARY", default_value = DEFAULT_BINARY_PATH)]
    pub binary: PathBuf,

    /// Value for the --benchmark_min_time flag (e.g. 0.05s or 100x)
    #[arg(long, env = "BENCH_MIN_TIME", default_value = DEFAULT_MIN_TIME)]
    pub min_time: String,

    /// Do not delete the JSON output file (its path is printed at the end)
    #[arg(
        long,
        env = "BENCH_KEEP_JSON",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub keep_json: bool,

    /// Directory for the transient JSON output file (system temp dir by default)
    #[arg(long, env = "BENCH_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Only run benchmarks matching this regex (--benchmark_filter)
    #[arg(long, env = "BENCH_FILTER")]
    pub filter: Option<String>,

    /// Summarize an existing JSON results file instead of running the binary
    #[arg(long, env = "BENCH_INPUT", conflicts_with_all = ["keep_json", "filter", "temp_dir"])]
    pub input: Option<PathBuf>,

    /// Summary output format
    #[arg(long, env = "BENCH_FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Emit logs as JSON lines
    #[arg(
        long,
        env = "BENCH_LOG_JSON",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub log_json: bool,
}

/// Where benchmark results come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSource {
    /// Run the executable and read its output file
    Run,
    /// Read a previously written results file
    File(PathBuf),
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub runner: RunnerConfig,
    pub output: OutputConfig,
    pub source: ResultSource,
}

/// Benchmark executable configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub binary: PathBuf,
    pub min_time: String,
    pub filter: Option<String>,
    pub keep_json: bool,
    pub temp_dir: Option<PathBuf>,
}

/// Output and logging configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub log_json: bool,
    pub rust_log: String,
}

impl Config {
    /// Load configuration from the command line and environment
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_cli(Cli::parse())
    }

    /// Build configuration from parsed arguments
    pub fn from_cli(cli: Cli) -> Self {
        let filter = cli
            .filter
            .as_deref()
            .map(sanitize_string)
            .filter(|f| !f.is_empty());

        Self {
            runner: RunnerConfig {
                binary: cli.binary,
                min_time: cli.min_time.trim().to_string(),
                filter,
                keep_json: cli.keep_json,
                temp_dir: cli.temp_dir,
            },
            output: OutputConfig {
                format: cli.format,
                log_json: cli.log_json,
                rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            },
            source: match cli.input {
                Some(path) => ResultSource::File(path),
                None => ResultSource::Run,
            },
        }
    }

    /// Check everything that must hold before a run starts
    pub fn validate(&self) -> AppResult<()> {
        match &self.source {
            ResultSource::File(path) => {
                if !path.is_file() {
                    return Err(AppError::InputNotFound(path.clone()));
                }
            }
            ResultSource::Run => self.runner.validate()?,
        }
        Ok(())
    }
}

impl RunnerConfig {
    fn validate(&self) -> AppResult<()> {
        if !self.binary.exists() {
            return Err(AppError::BinaryNotFound(self.binary.clone()));
        }
        if self.binary.is_dir() {
            return Err(AppError::Configuration(format!(
                "Benchmark binary is a directory: {}",
                self.binary.display()
            )));
        }
        if let Some(dir) = &self.temp_dir {
            if !dir.is_dir() {
                return Err(AppError::Configuration(format!(
                    "Temp directory does not exist: {}",
                    dir.display()
                )));
            }
        }
        validate_min_time(&self.min_time).map_err(|reason| AppError::InvalidMinTime {
            value: self.min_time.clone(),
            reason,
        })
    }
}
