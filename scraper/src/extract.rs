//! Turns a listing page into job records.

use std::sync::LazyLock;

use common::{JobRecord, PageResult};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::{
    COMPANY_CARD_SELECTOR, COMPANY_NAME_SELECTOR, JOB_TITLE_SELECTOR, MISSING_COMPANY_NAME,
    PAGINATION_HEADING_SELECTOR,
};
use crate::error::ScrapeError;

// Define selectors once (reused for all pages)
static PAGINATION_HEADING: LazyLock<Selector> = LazyLock::new(|| parse(PAGINATION_HEADING_SELECTOR));
static COMPANY_CARD: LazyLock<Selector> = LazyLock::new(|| parse(COMPANY_CARD_SELECTOR));
static COMPANY_NAME: LazyLock<Selector> = LazyLock::new(|| parse(COMPANY_NAME_SELECTOR));
static JOB_TITLE: LazyLock<Selector> = LazyLock::new(|| parse(JOB_TITLE_SELECTOR));

fn parse(selector: &str) -> Selector {
    Selector::parse(selector).expect("listing selectors are valid CSS")
}

/// Extracts every job on the page in document order.
///
/// `total_pages` is read only for page 1. Fails with
/// [`ScrapeError::NoListingsFound`] when the page has no company cards.
pub fn extract_page(html: &str, page: u32) -> Result<PageResult, ScrapeError> {
    // Parse HTML document
    let document = Html::parse_document(html);

    let total_pages = (page == 1).then(|| read_total_pages(&document));

    let cards: Vec<ElementRef<'_>> = document.select(&COMPANY_CARD).collect();
    if cards.is_empty() {
        return Err(ScrapeError::NoListingsFound);
    }

    let jobs: Vec<JobRecord> = cards.into_iter().flat_map(card_jobs).collect();
    debug!(jobs = jobs.len(), ?total_pages, "Extracted listing page");

    Ok(PageResult { jobs, total_pages })
}

/// Page count from the result heading, or 1 when it is missing or unreadable.
fn read_total_pages(document: &Html) -> u32 {
    document
        .select(&PAGINATION_HEADING)
        .next()
        .map(|heading| heading.text().map(str::trim).collect::<String>())
        .and_then(|text| parse_page_count(&text))
        .unwrap_or(1)
}

/// Reads the integer after the last "of", e.g. "Showing 1-10 of 7" gives 7.
pub fn parse_page_count(text: &str) -> Option<u32> {
    text.rsplit("of").next()?.trim().parse().ok()
}

/// One record per job title anchor, all sharing the card's company name.
fn card_jobs(card: ElementRef<'_>) -> Vec<JobRecord> {
    let company_name = card
        .select(&COMPANY_NAME)
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_else(|| MISSING_COMPANY_NAME.to_string());

    card.select(&JOB_TITLE)
        .map(|el| JobRecord {
            company_name: company_name.clone(),
            job_title: element_text(&el),
        })
        .collect()
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
