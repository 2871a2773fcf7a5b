use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use wellfound_scraper::{ScraperConfig, config};

/// Server settings, read from flags or the environment (`.env` included).
#[derive(Debug, Parser)]
#[command(name = "wellfound-server", about = "HTTP API over the Wellfound listing scraper")]
pub struct Config {
    #[arg(long, env = "SCRAPER_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Listing site the scraper talks to
    #[arg(long, env = "SCRAPER_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds to wait before every upstream request
    #[arg(long, env = "SCRAPER_DELAY_SECS", default_value_t = config::DEFAULT_REQUEST_DELAY.as_secs())]
    pub delay_secs: u64,
}

impl Config {
    pub fn scraper_config(&self) -> ScraperConfig {
        ScraperConfig::default()
            .with_base_url(self.base_url.clone())
            .with_request_delay(Duration::from_secs(self.delay_secs))
    }
}
