//! CLI entry point for the progress charts generator.
//!
//! `collect` fetches every topic and writes the chart dataset; `compose`
//! turns that dataset into the Markdown post.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use progress_charts::{
    collect::collect_all,
    config::FetchConfig,
    fetch::{BasicClient, Shutdown},
    output::write_dataset,
    report::compose,
    topics::TOPICS,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "progress_charts")]
#[command(about = "Collects world progress statistics and renders them as a post", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every topic and write the chart dataset
    Collect {
        /// JSON file to write the dataset to
        #[arg(short, long, default_value = "data/charts/chart-data.json")]
        output: PathBuf,
    },
    /// Render the Markdown post from a previously collected dataset
    Compose {
        /// Dataset written by `collect`
        #[arg(short, long, default_value = "data/charts/chart-data.json")]
        input: PathBuf,

        /// Markdown file to write the post to
        #[arg(short, long, default_value = "content/writing/32-optimistic-charts.md")]
        post: PathBuf,

        /// Copy of the dataset for the site's chart shortcodes
        #[arg(long, default_value = "data/optimistic_charts.json")]
        shortcode_data: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/progress_charts.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("progress_charts.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Collect { output } => collect(&output).await?,
        Commands::Compose {
            input,
            post,
            shortcode_data,
        } => {
            let count = compose(&input, &post, &shortcode_data, Utc::now().date_naive())?;
            info!(topics = count, "Successfully processed charts");
        }
    }

    Ok(())
}

/// Runs the collector and writes the dataset. Ctrl-C abandons pending and
/// in-flight fetches; whatever finished is still written.
#[tracing::instrument(skip_all, fields(output = %output.display()))]
async fn collect(output: &Path) -> Result<()> {
    let config = FetchConfig::from_env();
    let client = Arc::new(BasicClient::new(config.timeout).context("Building HTTP client")?);

    let (trigger, shutdown) = Shutdown::new();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling outstanding fetches");
            let _ = trigger.send(true);
        }
    });

    let dataset = collect_all(TOPICS, client, &config, shutdown).await;
    write_dataset(output, &dataset)?;

    info!(topics = dataset.len(), "Successfully processed charts");
    Ok(())
}
