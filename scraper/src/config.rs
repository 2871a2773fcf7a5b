//! Upstream site constants and pipeline configuration.
//!
//! The selectors below are tied to the listing site's current markup. A
//! redesign upstream makes them silently stop matching.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://wellfound.com";

/// Pause before every upstream request.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(2);

// Headers to mimic a desktop browser
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const REFERER: &str = "https://wellfound.com/";

/// Result count heading, only rendered on the first page.
pub const PAGINATION_HEADING_SELECTOR: &str = "h4.styles_resultCount__Biln8";
/// One block per company; the class attribute must match exactly.
pub const COMPANY_CARD_SELECTOR: &str =
    r#"div[class="mb-6 w-full rounded border border-gray-400 bg-white"]"#;
pub const COMPANY_NAME_SELECTOR: &str = r#"h2[class="inline text-md font-semibold"]"#;
pub const JOB_TITLE_SELECTOR: &str =
    r#"a[class="mr-2 text-sm font-semibold text-brand-burgandy hover:underline"]"#;

/// Placeholder used when a card has no company heading.
pub const MISSING_COMPANY_NAME: &str = "N/A";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Scheme and host of the listing site, without a trailing path.
    pub base_url: String,
    pub request_delay: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

impl ScraperConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }
}
