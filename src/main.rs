//! bench-summary - Application Entry Point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bench_summary::{
    Config, SummaryService,
    benchmark::{print_summary, report::kept_json_notice},
    config::OutputConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    init_tracing(&config.output);

    tracing::debug!(?config, "Configuration loaded");

    let format = config.output.format;
    let summary = SummaryService::new(config).collect().await?;

    print_summary(&summary.rows, format)?;

    if let Some(path) = summary.kept_json {
        match kept_json_notice(&path, format) {
            Some(notice) => print!("{}", notice),
            None => tracing::info!(path = %path.display(), "JSON results kept"),
        }
    }

    Ok(())
}

/// Logs go to stderr so the summary on stdout stays machine-readable
fn init_tracing(output: &OutputConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| output.rust_log.clone().into());

    let registry = tracing_subscriber::registry().with(filter);
    if output.log_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
