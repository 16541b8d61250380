use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use civ_core::{Address, Error, NewsArticle, Representative};

use crate::AppState;

/// User-facing failure: a status and a generic message. Internal detail
/// goes to the log, never over the wire.
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[derive(Deserialize)]
pub struct NewsRequest {
    #[serde(default)]
    query: String,
}

#[derive(Serialize)]
pub struct NewsResponse {
    articles: Vec<NewsArticle>,
}

#[derive(Serialize)]
pub struct RepresentativesResponse {
    representatives: Vec<Representative>,
}

pub async fn representatives(
    State(state): State<Arc<AppState>>,
    Json(address): Json<Address>,
) -> Result<Json<RepresentativesResponse>, ApiError> {
    match state.civic.lookup(&address).await {
        Ok(representatives) => Ok(Json(RepresentativesResponse { representatives })),
        Err(err) => {
            tracing::error!("representative lookup failed: {}", err);
            Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch representatives",
            ))
        }
    }
}

pub async fn news(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewsRequest>,
) -> Result<Json<NewsResponse>, ApiError> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "Query is required"));
    }

    match state.news.fetch_news(query).await {
        Ok(articles) => Ok(Json(NewsResponse { articles })),
        Err(Error::Search(_)) => Err(ApiError::new(StatusCode::NOT_FOUND, "No news found")),
        Err(err) => {
            tracing::error!("news fetch failed: {}", err);
            Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch news",
            ))
        }
    }
}
