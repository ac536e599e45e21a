//! Lead Scout — Binary Entrypoint
//! Discovers local businesses for a category/location, scores each as a
//! sales lead, prints a summary table, and writes a CSV.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lead_scout::config::AppConfig;
use lead_scout::engine::ScoringEngine;
use lead_scout::pipeline::{scout_leads, ScoutParams};
use lead_scout::places::PlacesClient;
use lead_scout::report;
use lead_scout::weights;

#[derive(Debug, Parser)]
#[command(name = "lead-scout", about = "Score local businesses as sales leads")]
struct Cli {
    /// Business category, e.g. "gym"
    #[arg(long)]
    category: String,

    /// Location, e.g. "San Diego, CA"
    #[arg(long)]
    location: String,

    /// Target number of leads
    #[arg(long, default_value_t = 50)]
    num: usize,

    /// CSV output path (default derived from category/location)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lead_scout=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let cfg = AppConfig::from_env()?;

    let table = weights::load_weights_or_default(Some(&cfg.weights_path))?;
    let engine = ScoringEngine::new(table);
    let client = PlacesClient::new(&cfg.api_key);

    let params = ScoutParams {
        category: cli.category.clone(),
        location: cli.location.clone(),
        target_n: cli.num,
        pace: cfg.pace,
    };

    let rows = scout_leads(&client, &engine, &params).await?;
    report::print_summary(&rows);

    let out = cli
        .out
        .unwrap_or_else(|| PathBuf::from(report::default_output_name(&cli.category, &cli.location)));
    report::write_csv(&out, &rows)?;
    info!(path = %out.display(), rows = rows.len(), "saved results");

    Ok(())
}
