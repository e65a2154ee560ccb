//! Benchmark runner - Invokes the benchmark executable and collects its results
//!
//! The executable writes its JSON report to a transient file owned by the
//! run. The file is removed on every exit path unless it was explicitly
//! kept, in which case its path is handed back to the caller.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use tokio::fs;
use tokio::process::Command;

use crate::config::RunnerConfig;
use crate::constants::{RESULT_FILE_PREFIX, RESULT_FILE_SUFFIX, flags};
use crate::error::{AppError, AppResult};
use crate::models::BenchmarkReport;
use crate::utils::{format_elapsed, parse_datetime};

/// Results of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    pub report: BenchmarkReport,
    /// Location of the JSON file when it was kept
    pub kept_json: Option<PathBuf>,
}

/// Runs the benchmark executable once and loads its report
pub struct BenchmarkRunner {
    config: RunnerConfig,
}

impl BenchmarkRunner {
    /// Create a new benchmark runner
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Arguments passed to the executable
    pub fn command_args(&self, json_path: &Path) -> Vec<OsString> {
        // The path may not be valid UTF-8
        let mut out = OsString::from(format!("{}=", flags::OUT));
        out.push(json_path.as_os_str());

        let mut args = vec![
            OsString::from(format!("{}={}", flags::MIN_TIME, self.config.min_time)),
            out,
            OsString::from(format!("{}={}", flags::OUT_FORMAT, flags::OUT_FORMAT_JSON)),
        ];
        if let Some(filter) = &self.config.filter {
            args.push(OsString::from(format!("{}={}", flags::FILTER, filter)));
        }
        args
    }

    /// Run the executable and load the report it wrote
    pub async fn run(&self) -> AppResult<RunOutcome> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(RESULT_FILE_PREFIX).suffix(RESULT_FILE_SUFFIX);
        let json_path = match &self.config.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        }
        .into_temp_path();

        let result = self.execute_and_load(&json_path).await;

        if self.config.keep_json {
            let kept = json_path.keep().map_err(|e| AppError::Io(e.error))?;
            if result.is_err() {
                tracing::warn!("JSON results kept at: {}", kept.display());
            }
            return result.map(|report| RunOutcome {
                report,
                kept_json: Some(kept),
            });
        }

        let path = json_path.to_path_buf();
        if let Err(e) = json_path.close() {
            tracing::warn!("Failed to remove {}: {}", path.display(), e);
        }

        result.map(|report| RunOutcome {
            report,
            kept_json: None,
        })
    }

    async fn execute_and_load(&self, json_path: &Path) -> AppResult<BenchmarkReport> {
        self.execute(json_path).await?;
        let report = load_report(json_path).await?;
        log_context(&report);
        Ok(report)
    }

    /// Invoke the executable and wait for it to finish
    async fn execute(&self, json_path: &Path) -> AppResult<()> {
        let binary = &self.config.binary;
        let args = self.command_args(json_path);

        tracing::info!(
            binary = %binary.display(),
            args = ?args,
            "Running benchmark"
        );

        let start = Instant::now();
        let status = Command::new(binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| AppError::Spawn {
                binary: binary.clone(),
                source,
            })?;

        let elapsed = start.elapsed();
        if !status.success() {
            tracing::error!(
                "Benchmark failed after {}: {}",
                format_elapsed(elapsed),
                status
            );
            return Err(AppError::BenchmarkFailed {
                binary: binary.clone(),
                status,
            });
        }

        tracing::info!("Benchmark finished in {}", format_elapsed(elapsed));
        Ok(())
    }
}

/// Read and parse a benchmark JSON report
pub async fn load_report(path: &Path) -> AppResult<BenchmarkReport> {
    let bytes = fs::read(path).await.map_err(|source| AppError::ReadResults {
        path: path.to_path_buf(),
        source,
    })?;
    let report: BenchmarkReport = serde_json::from_slice(&bytes)?;

    tracing::debug!(
        path = %path.display(),
        records = report.benchmarks.len(),
        "Loaded benchmark report"
    );
    Ok(report)
}

/// Log the machine and build the results came from
pub fn log_context(report: &BenchmarkReport) {
    let Some(context) = &report.context else {
        return;
    };

    let date = context
        .date
        .as_deref()
        .map(|d| parse_datetime(d).map(|dt| dt.to_rfc3339()).unwrap_or_else(|| d.to_string()));

    tracing::info!(
        host = context.host_name.as_deref().unwrap_or("unknown"),
        cpus = context.num_cpus,
        mhz_per_cpu = context.mhz_per_cpu,
        build = context.library_build_type.as_deref().unwrap_or("unknown"),
        date = date.as_deref().unwrap_or("unknown"),
        "Benchmark context"
    );

    if context.library_build_type.as_deref() == Some("debug") {
        tracing::warn!("Benchmark library was built in debug mode; timings may be unreliable");
    }
}
