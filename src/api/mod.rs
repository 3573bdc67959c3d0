//! HTTP API handlers
//!
//! The browser never sees TMDB credentials: it calls these routes, which
//! forward to TMDB through the shared [`TmdbClient`].

use crate::catalog::{parse_append_to_response, CatalogError, TmdbClient};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TmdbClient>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(catalog: TmdbClient) -> Self {
        Self {
            catalog: Arc::new(catalog),
            started_at: Instant::now(),
        }
    }
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Handler failure as an HTTP response.
///
/// A TMDB 404 stays a 404; any other catalog failure is the upstream's
/// fault and becomes 502.
pub enum ApiError {
    BadRequest(String),
    Catalog(CatalogError),
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        ApiError::Catalog(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Catalog(e) => {
                tracing::warn!("Catalog request failed: {}", e);
                let status = match e {
                    CatalogError::Status { status: 404, .. } => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, e.to_string())
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "movie-finder",
        version: env!("MOVIE_FINDER_VERSION"),
        git_sha: env!("MOVIE_FINDER_GIT_SHA"),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub append_to_response: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

/// GET /api/movies/details/{movie_id} - Movie details, optionally expanded
pub async fn movie_details_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    Query(params): Query<DetailsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let expand = params
        .append_to_response
        .as_deref()
        .map(parse_append_to_response)
        .unwrap_or_default();
    let details = state.catalog.movie_details(&movie_id, &expand).await?;
    Ok(Json(details))
}

/// GET /api/movies/trending - Movies trending today
pub async fn trending_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.catalog.trending_movies().await?))
}

/// GET /api/movies/search?query= - Title search
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest(
            "query must not be empty".to_string(),
        ));
    }
    Ok(Json(state.catalog.search_movies(query).await?))
}

/// Catalog proxy routes (without static files or middleware)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/api/movies/trending", get(trending_handler))
        .route("/api/movies/search", get(search_handler))
        .route("/api/movies/details/{movie_id}", get(movie_details_handler))
        .with_state(state)
}
