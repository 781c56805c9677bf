mod cache;
mod error;
mod fetch;
mod input;
mod parser;
mod pipeline;
mod rows;
mod settings;
mod sink;
mod store;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "camara_scraper",
    about = "Chamber of Deputies roll-call vote scraper"
)]
struct Cli {
    /// File with one vote id per line
    input: PathBuf,
    /// CSV file to (re)create
    output: PathBuf,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = settings::Settings::load();
    info!(?settings, "starting scraper");

    let t0 = Instant::now();
    let store = store::DiskStore::open(Path::new(&settings.cache_dir))?;
    let fetcher = fetch::HttpFetcher::new(
        &settings.user_agent,
        Duration::from_secs(settings.timeout_secs),
    )?;
    let cache = cache::PageCache::new(store, fetcher);

    let stats = pipeline::run(&cli.input, &cli.output, &cache, &settings)?;
    info!(
        processed = stats.processed,
        skipped = stats.skipped,
        elapsed = %format_duration(t0.elapsed()),
        "run complete"
    );
    Ok(())
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

// ── Tests ──
