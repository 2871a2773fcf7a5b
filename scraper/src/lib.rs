//! Wellfound role listing scraper
//!
//! Fetches one listing page for a role keyword and extracts
//! (company, job title) pairs plus the total page count.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod roles;

use common::PageResult;
use reqwest::Client;
use tracing::info;

pub use config::ScraperConfig;
pub use error::ScrapeError;

/// Stateless apart from its configuration and HTTP client; calls may run
/// concurrently.
#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
    config: ScraperConfig,
}

impl Scraper {
    pub fn new(config: ScraperConfig) -> reqwest::Result<Self> {
        Ok(Self {
            client: fetch::build_client()?,
            config,
        })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetches page `page` of the listings for `keyword` and extracts its jobs.
    ///
    /// Every failure is terminal for the call; nothing is retried.
    pub async fn fetch_and_extract(
        &self,
        keyword: &str,
        page: u32,
    ) -> Result<PageResult, ScrapeError> {
        if keyword.trim().is_empty() {
            return Err(ScrapeError::InvalidRequest(
                "keyword must not be empty".to_string(),
            ));
        }
        if page < 1 {
            return Err(ScrapeError::InvalidRequest(
                "page must be greater than or equal to 1".to_string(),
            ));
        }

        let url = fetch::listing_url(&self.config, keyword, page)?;
        let html = fetch::fetch_page(&self.client, url, self.config.request_delay).await?;
        let result = extract::extract_page(&html, page)?;

        info!(
            keyword,
            page,
            jobs = result.jobs.len(),
            total_pages = ?result.total_pages,
            "✅ Extracted job listings"
        );
        Ok(result)
    }
}
