use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::ErrorResponse;
use wellfound_scraper::ScrapeError;

/// A scrape failure rendered as `{ "error": ... }` with a matching status.
#[derive(Debug)]
pub struct ApiError(pub ScrapeError);

impl From<ScrapeError> for ApiError {
    fn from(err: ScrapeError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            // Upstream status passes through; anything unrepresentable is a bad gateway
            ScrapeError::UpstreamHttp { status_code } => {
                StatusCode::from_u16(*status_code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ScrapeError::RequestFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ScrapeError::NoListingsFound => StatusCode::NOT_FOUND,
            ScrapeError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}
