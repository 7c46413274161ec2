use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use insights_core::{build_summary, find_anomalies, Finding, InsightsError, Post, Summary};
use serde_json::json;
use tracing::error;

use crate::AppState;

/// Fetch and return the raw post batch.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.client.fetch_posts().await?;
    Ok(Json(posts))
}

/// Fetch the batch and return the anomaly findings.
pub async fn list_anomalies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Finding>>, ApiError> {
    let posts = state.client.fetch_posts().await?;
    Ok(Json(find_anomalies(&posts, &state.classifier)))
}

/// Fetch the batch and return the vocabulary summary.
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<Summary>, ApiError> {
    let posts = state.client.fetch_posts().await?;
    Ok(Json(build_summary(&posts)))
}

/// Serve the frontend entrypoint when a bundle is present.
pub async fn root(State(state): State<AppState>) -> Response {
    let index = state.static_dir.join("index.html");
    match tokio::fs::read(&index).await {
        Ok(bytes) => Html(bytes).into_response(),
        Err(_) => Json(json!({ "message": "Frontend not built yet." })).into_response(),
    }
}

/// Maps engine errors onto explicit JSON error responses. A failed fetch
/// is surfaced as a gateway error, never as an empty success body.
#[derive(Debug)]
pub struct ApiError(pub InsightsError);

impl From<InsightsError> for ApiError {
    fn from(e: InsightsError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        error!("Request failed: {}", self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
