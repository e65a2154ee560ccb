//! Custom error types and handling
//!
//! Every fatal condition of a run maps to one variant here. Recoverable
//! conditions (malformed records, unparsable sizes, missing throughput) are
//! handled inside the summarizer and never surface as errors.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Benchmark binary not found: {}", .0.display())]
    BinaryNotFound(PathBuf),

    #[error("Results file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid min time '{value}': {reason}")]
    InvalidMinTime { value: String, reason: &'static str },

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Benchmark process errors
    #[error("Failed to launch {}: {source}", .binary.display())]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Benchmark {} failed: {}", .binary.display(), describe_status(.status))]
    BenchmarkFailed { binary: PathBuf, status: ExitStatus },

    // Result errors
    #[error("Failed to read results from {}: {source}", .path.display())]
    ReadResults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid benchmark results: {0}")]
    InvalidResults(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BinaryNotFound(_) => "BINARY_NOT_FOUND",
            Self::InputNotFound(_) => "INPUT_NOT_FOUND",
            Self::InvalidMinTime { .. } => "INVALID_MIN_TIME",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Spawn { .. } => "SPAWN_ERROR",
            Self::BenchmarkFailed { .. } => "BENCHMARK_FAILED",
            Self::ReadResults { .. } => "READ_RESULTS_ERROR",
            Self::InvalidResults(_) => "INVALID_RESULTS",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Whether the error was detected before any process was launched
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::BinaryNotFound(_)
                | Self::InputNotFound(_)
                | Self::InvalidMinTime { .. }
                | Self::Configuration(_)
        )
    }
}

/// Human-readable description of a process exit status
fn describe_status(status: &ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exited with code {}", code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("killed by signal {}", signal);
        }
    }

    "terminated abnormally".to_string()
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
