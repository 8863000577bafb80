use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::jobs::client::SearchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // The search endpoint's contract is an `{error, details}`
            // envelope with no `results` key, whatever the failure kind.
            AppError::Search(err) => {
                tracing::error!("Search error: {err}");
                let status = match &err {
                    SearchError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                    SearchError::UpstreamClient { .. } | SearchError::UpstreamServer { .. } => {
                        StatusCode::BAD_GATEWAY
                    }
                    SearchError::Network(_) | SearchError::Decode(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                let body = Json(json!({
                    "error": "Failed to fetch jobs",
                    "details": err.to_string()
                }));
                (status, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_maps_to_envelope_status() {
        let response = AppError::Search(SearchError::Timeout).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

        let response =
            AppError::Search(SearchError::UpstreamServer { status: 503 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
