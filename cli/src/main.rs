//! CLI entrypoint for statehouse
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use statehouse_application::{
    BillReport, NoProgress, ReconcileBillInput, ReconcileBillUseCase, ReconcileConfig,
    ReconcileProgressNotifier, VoteDocumentFetcher,
};
use statehouse_domain::OutputFormat;
use statehouse_infrastructure::{
    ConfigLoader, FileConfig, LocalVoteFetcher, ScraperTableExtractor, load_bill_files,
};
use statehouse_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting statehouse");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    if let Some(base_url) = &cli.base_url {
        config.fetch.base_url = Some(base_url.clone());
    }
    if let Some(dir) = &cli.documents {
        config.fetch.documents_dir = Some(dir.clone());
    }
    config.validate()?;
    let reconcile_config = config.reconcile_config()?;

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Input ===
    let inputs = load_bill_files(&cli.inputs)?;
    info!("Loaded {} bill(s) from {} file(s)", inputs.len(), cli.inputs.len());

    // === Dependency Injection ===
    let progress: Box<dyn ReconcileProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if cli.verbose > 0 {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let reports = match &config.fetch.documents_dir {
        Some(dir) => {
            info!("Reading vote documents from {}", dir.display());
            let fetcher = Arc::new(LocalVoteFetcher::new(dir));
            reconcile(fetcher, reconcile_config, inputs, progress.as_ref()).await
        }
        None => {
            let fetcher = Arc::new(http_fetcher(&config)?);
            reconcile(fetcher, reconcile_config, inputs, progress.as_ref()).await
        }
    };

    // Output results
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&reports),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&reports),
        OutputFormat::Json => ConsoleFormatter::format_json(&reports),
    };
    println!("{}", output.trim_end());

    let failed = reports.iter().filter(|r| r.result.is_err()).count();
    if failed > 0 {
        bail!("{} of {} bill(s) could not be reconciled", failed, reports.len());
    }

    Ok(())
}

/// Initialize logging based on verbosity level, optionally teeing into a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn reconcile<F: VoteDocumentFetcher>(
    fetcher: Arc<F>,
    config: ReconcileConfig,
    inputs: Vec<ReconcileBillInput>,
    progress: &dyn ReconcileProgressNotifier,
) -> Vec<BillReport> {
    let use_case =
        ReconcileBillUseCase::new(fetcher, Arc::new(ScraperTableExtractor::new())).with_config(config);
    use_case.execute_all(inputs, progress).await
}

#[cfg(feature = "http-fetch")]
fn http_fetcher(config: &FileConfig) -> Result<statehouse_infrastructure::HttpVoteFetcher> {
    let timeout = std::time::Duration::from_secs(config.fetch.timeout_seconds);
    Ok(statehouse_infrastructure::HttpVoteFetcher::new(
        &config.fetch.user_agent,
        timeout,
    )?)
}

#[cfg(not(feature = "http-fetch"))]
fn http_fetcher(_config: &FileConfig) -> Result<LocalVoteFetcher> {
    bail!("Built without HTTP support; pass --documents <DIR> to read saved vote documents")
}
