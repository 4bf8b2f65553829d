use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use iris_client::ReqwestFetcher;
use iris_core::report::StdoutReporter;
use iris_core::{dispatch_aggregated, dispatch_direct, dispatch_pool, pool_size};

/// Built-in URL list used when none are given on the command line.
const DEFAULT_LINKS: &[&str] = &[
    "https://cisco.com",
    "https://google.com",
    "https://facebook.com",
    "https://microsoft.com",
    "https://amazon.com",
    "https://twitter.com",
];

#[derive(Parser)]
#[command(name = "iris", version, about = "Concurrent URL status checker")]
struct Cli {
    /// URLs to check (defaults to a built-in list)
    urls: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "IRIS_TIMEOUT_SECS", default_value_t = 5)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Report lines go to stdout; logging stays on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let urls: Vec<String> = if cli.urls.is_empty() {
        DEFAULT_LINKS.iter().map(ToString::to_string).collect()
    } else {
        cli.urls
    };

    let fetcher = ReqwestFetcher::with_timeout(Duration::from_secs(cli.timeout_secs))
        .context("Failed to create HTTP client")?;
    let reporter = StdoutReporter;

    // Each strategy runs to completion before the next starts.
    tracing::info!(count = urls.len(), "direct dispatch");
    println!();
    dispatch_direct(&fetcher, &reporter, &urls).await;

    tracing::info!(count = urls.len(), "channel-aggregated dispatch");
    println!();
    dispatch_aggregated(&fetcher, &reporter, &urls).await;

    let workers = pool_size(urls.len());
    tracing::info!(count = urls.len(), workers, "worker-pool dispatch");
    println!();
    dispatch_pool(&fetcher, &reporter, &urls, workers).await;

    Ok(())
}
