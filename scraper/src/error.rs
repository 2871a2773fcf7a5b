use thiserror::Error;

/// Terminal failures of a single fetch-and-extract call.
///
/// Missing per-card fields and unreadable page counts are not errors; they
/// fall back to defaults during extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// The listing site answered with a non-2xx status.
    #[error("HTTP error: {status_code}")]
    UpstreamHttp { status_code: u16 },

    /// Timeout, connection or DNS failure, or an unreadable response body.
    #[error("Request failed: {message}")]
    RequestFailure { message: String },

    /// No company cards on the page: empty results or a changed layout.
    #[error("No job listings found on this page.")]
    NoListingsFound,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ScrapeError::UpstreamHttp {
                status_code: status.as_u16(),
            },
            None => ScrapeError::RequestFailure {
                message: err.to_string(),
            },
        }
    }
}
