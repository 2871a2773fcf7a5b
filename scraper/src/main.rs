//! Wellfound Job Scraper
//!
//! Fetches one listing page for a role and prints the jobs as JSON.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wellfound_scraper::roles::{known_roles, normalize_keyword};
use wellfound_scraper::{Scraper, ScraperConfig, config};

#[derive(Debug, Parser)]
#[command(name = "wellfound-scraper", about = "Scrape one page of Wellfound role listings")]
struct Cli {
    /// Role name or keyword, e.g. "Backend Engineer" or backend-engineer
    #[arg(required_unless_present = "list_roles")]
    keyword: Option<String>,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    #[arg(long, env = "SCRAPER_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Seconds to wait before the request
    #[arg(long, env = "SCRAPER_DELAY_SECS", default_value_t = config::DEFAULT_REQUEST_DELAY.as_secs())]
    delay_secs: u64,

    /// Print the known role names and their keywords, then exit
    #[arg(long)]
    list_roles: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wellfound_scraper=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_roles {
        println!("{}", serde_json::to_string_pretty(&known_roles())?);
        return Ok(());
    }

    let keyword = normalize_keyword(cli.keyword.as_deref().unwrap_or_default());
    let config = ScraperConfig::default()
        .with_base_url(cli.base_url)
        .with_request_delay(Duration::from_secs(cli.delay_secs));
    let scraper = Scraper::new(config).context("Failed to build HTTP client")?;

    let result = scraper
        .fetch_and_extract(&keyword, cli.page)
        .await
        .with_context(|| format!("Failed to scrape {keyword:?} page {}", cli.page))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
