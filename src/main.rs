mod models;
mod scrapers;

use clap::Parser;
use scrapers::{HttpPageSource, ScraperConfig, TruckScoutScraper};
use std::path::PathBuf;
use tracing::{info, Level};

/// Scrape used refrigerated vans from TruckScout24 into a JSON file and image folders
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory receiving data.json and one image folder per listing
    #[arg(default_value = "data")]
    output_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    info!("🚚 Truck Scout - TruckScout24 Scraper");
    info!("Output directory: {}", cli.output_dir.display());

    let config = ScraperConfig::default();
    let source = HttpPageSource::new(&config)?;
    let mut scraper = TruckScoutScraper::new(config, source, cli.output_dir)?;

    let data = scraper.process().await?;
    info!("✅ Scraped {} listings", data.ads.len());

    Ok(())
}
