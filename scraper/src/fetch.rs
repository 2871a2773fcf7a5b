use std::time::Duration;

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER};
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::config::{self, ScraperConfig};
use crate::error::ScrapeError;

/// Builds the HTTP client with the static browser headers.
///
/// Redirects are not followed, so a 3xx reaches the status check. No
/// timeout is set; the transport defaults apply.
pub fn build_client() -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(config::ACCEPT_LANGUAGE));
    headers.insert(REFERER, HeaderValue::from_static(config::REFERER));

    Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(config::USER_AGENT)
        .default_headers(headers)
        .build()
}

/// `{base_url}/role/{keyword}?page={page}`, with the keyword encoded as a
/// single path segment.
pub fn listing_url(config: &ScraperConfig, keyword: &str, page: u32) -> Result<Url, ScrapeError> {
    let mut url = Url::parse(&config.base_url).map_err(|e| {
        ScrapeError::InvalidRequest(format!("bad base url {:?}: {}", config.base_url, e))
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            ScrapeError::InvalidRequest(format!("base url {:?} cannot take a path", config.base_url))
        })?
        .pop_if_empty()
        .extend(["role", keyword]);
    url.query_pairs_mut().append_pair("page", &page.to_string());

    Ok(url)
}

/// Waits `delay`, then GETs `url` and returns the body of a 2xx response.
pub async fn fetch_page(client: &Client, url: Url, delay: Duration) -> Result<String, ScrapeError> {
    // Delay to avoid triggering rate limits
    if !delay.is_zero() {
        debug!(?delay, "Waiting before upstream request");
        tokio::time::sleep(delay).await;
    }

    info!("📡 Fetching jobs from: {}", url);

    let response = client.get(url.clone()).send().await.map_err(|e| {
        let err = ScrapeError::from(e);
        warn!(%url, error = %err, "Upstream request failed");
        err
    })?;

    // Anything outside 2xx fails, redirects included
    let status = response.status();
    if !status.is_success() {
        warn!(%url, %status, "Upstream returned non-success status");
        return Err(ScrapeError::UpstreamHttp {
            status_code: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| {
        warn!(%url, error = %e, "Failed to read response body");
        ScrapeError::RequestFailure {
            message: e.to_string(),
        }
    })?;

    debug!(bytes = body.len(), %url, "Fetched listing page");
    Ok(body)
}
