//! Summary service - Collects benchmark results and turns them into rows

use std::path::PathBuf;

use crate::benchmark::{BenchmarkRunner, load_report, summarize};
use crate::config::{Config, ResultSource};
use crate::error::AppResult;
use crate::models::SummaryRow;

/// Rows ready for rendering, plus where the raw results ended up
#[derive(Debug)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub kept_json: Option<PathBuf>,
}

/// Produces a summary from a fresh run or an existing results file
pub struct SummaryService {
    config: Config,
}

impl SummaryService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Validate the configuration, collect results and summarize them
    pub async fn collect(&self) -> AppResult<Summary> {
        self.config.validate()?;

        let (report, kept_json) = match &self.config.source {
            ResultSource::Run => {
                let runner = BenchmarkRunner::new(self.config.runner.clone());
                let outcome = runner.run().await?;
                (outcome.report, outcome.kept_json)
            }
            ResultSource::File(path) => {
                tracing::info!("Summarizing existing results from {}", path.display());
                (load_report(path).await?, None)
            }
        };

        let rows = summarize(&report.benchmarks);
        tracing::info!(
            records = report.benchmarks.len(),
            rows = rows.len(),
            "Benchmark results summarized"
        );

        Ok(Summary { rows, kept_json })
    }
}
