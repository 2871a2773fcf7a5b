//! HTTP routes over the listing scraper.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use common::PageResult;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::warn;
use wellfound_scraper::roles::{Role, known_roles, normalize_keyword};
use wellfound_scraper::{ScrapeError, Scraper};

use crate::error::ApiError;

/// Query parameters for the scrape endpoint
#[derive(Debug, Deserialize)]
pub struct ScrapeParams {
    keyword: Option<String>,
    page: Option<i64>,
}

/// Shared application state
pub struct AppState {
    pub scraper: Scraper,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/roles", get(roles_handler))
        .route("/scrape", get(scrape_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for GET /scrape?keyword=<role>&page=<n>
async fn scrape_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ScrapeParams>, QueryRejection>,
) -> Result<Json<PageResult>, ApiError> {
    let Query(params) =
        params.map_err(|e| ScrapeError::InvalidRequest(e.body_text()))?;

    let keyword = params
        .keyword
        .as_deref()
        .map(normalize_keyword)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ScrapeError::InvalidRequest("keyword is required".to_string()))?;

    let page = params.page.unwrap_or(1);
    let page = u32::try_from(page)
        .ok()
        .filter(|p| *p >= 1)
        .ok_or_else(|| {
            ScrapeError::InvalidRequest("page must be greater than or equal to 1".to_string())
        })?;

    match state.scraper.fetch_and_extract(&keyword, page).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            warn!(keyword = %keyword, page, error = %err, "Scrape failed");
            Err(err.into())
        }
    }
}

/// Handler for GET /roles
async fn roles_handler() -> Json<Vec<Role>> {
    Json(known_roles())
}

/// Handler for GET / (root)
async fn root_handler() -> &'static str {
    "🔍 Wellfound Job Scraper API\n\nEndpoints:\n  GET /scrape?keyword=<role>&page=<n> - Jobs on one listing page\n  GET /roles - Known role keywords\n\nExample:\n  curl 'http://127.0.0.1:3000/scrape?keyword=backend-engineer&page=1'"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use wellfound_scraper::ScraperConfig;

    const LISTING_PAGE: &str = r#"<html><body>
        <h4 class="styles_resultCount__Biln8">Showing 1-10 of 7</h4>
        <div class="mb-6 w-full rounded border border-gray-400 bg-white">
            <h2 class="inline text-md font-semibold">  Acme Inc.  </h2>
            <a class="mr-2 text-sm font-semibold text-brand-burgandy hover:underline">Engineer</a>
            <a class="mr-2 text-sm font-semibold text-brand-burgandy hover:underline">Designer</a>
        </div>
        <div class="mb-6 w-full rounded border border-gray-400 bg-white">
            <a class="mr-2 text-sm font-semibold text-brand-burgandy hover:underline">Analyst</a>
        </div>
    </body></html>"#;

    fn app(base_url: &str) -> Router {
        let config = ScraperConfig::default()
            .with_base_url(base_url)
            .with_request_delay(Duration::ZERO);
        let scraper = Scraper::new(config).unwrap();
        router(Arc::new(AppState { scraper }))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn upstream(status: usize, body: &str) -> (mockito::ServerGuard, mockito::Mock) {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Regex(r"^/role/".to_string()))
            .match_query(mockito::Matcher::Any)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;
        (server, mock)
    }

    #[tokio::test]
    async fn test_scrape_first_page() {
        let (server, _mock) = upstream(200, LISTING_PAGE).await;

        let (status, body) =
            get_json(app(&server.url()), "/scrape?keyword=software-engineer").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "jobs": [
                    { "company_name": "Acme Inc.", "job_title": "Engineer" },
                    { "company_name": "Acme Inc.", "job_title": "Designer" },
                    { "company_name": "N/A", "job_title": "Analyst" }
                ],
                "total_pages": 7
            })
        );
    }

    #[tokio::test]
    async fn test_scrape_later_page_has_null_total() {
        let (server, _mock) = upstream(200, LISTING_PAGE).await;

        let (status, body) = get_json(app(&server.url()), "/scrape?keyword=designer&page=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_pages"], Value::Null);
        assert_eq!(body["jobs"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_scrape_normalizes_role_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/role/full-stack-engineer")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body(LISTING_PAGE)
            .create_async()
            .await;

        let (status, _) = get_json(
            app(&server.url()),
            "/scrape?keyword=Full%20Stack%20Engineer",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upstream_error_passes_status_through() {
        let (server, _mock) = upstream(503, "").await;

        let (status, body) = get_json(app(&server.url()), "/scrape?keyword=designer").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, serde_json::json!({ "error": "HTTP error: 503" }));
    }

    #[tokio::test]
    async fn test_no_listings_is_404() {
        let (server, _mock) = upstream(200, "<html><body></body></html>").await;

        let (status, body) = get_json(app(&server.url()), "/scrape?keyword=designer").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({ "error": "No job listings found on this page." })
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_500() {
        let (status, body) = get_json(app("http://127.0.0.1:1"), "/scrape?keyword=designer").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Request failed: ")
        );
    }

    #[tokio::test]
    async fn test_invalid_params_are_422() {
        for uri in [
            "/scrape",
            "/scrape?keyword=%20%20",
            "/scrape?keyword=designer&page=0",
            "/scrape?keyword=designer&page=-3",
            "/scrape?keyword=designer&page=two",
        ] {
            let (status, body) = get_json(app("http://127.0.0.1:1"), uri).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "uri: {uri}");
            assert!(body["error"].is_string(), "uri: {uri}");
        }
    }

    #[tokio::test]
    async fn test_roles() {
        let (status, body) = get_json(app("http://127.0.0.1:1"), "/roles").await;

        assert_eq!(status, StatusCode::OK);
        let roles = body.as_array().unwrap();
        assert_eq!(roles.len(), 14);
        assert_eq!(
            roles[0],
            serde_json::json!({ "name": "Full Stack Engineer", "keyword": "full-stack-engineer" })
        );
    }
}
