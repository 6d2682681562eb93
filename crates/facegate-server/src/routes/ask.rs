//! Ask route — relays questions to the downstream inference service.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/ask", post(ask))
}

#[derive(Debug, Default, Deserialize)]
struct AskBody {
    #[serde(default)]
    query: Option<String>,
}

async fn ask(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("Invalid request body: {}", rejection) })),
            );
        }
    };

    // The accepted query is forwarded verbatim; only an absent or empty
    // value is rejected.
    let query = match body.query.filter(|q| !q.is_empty()) {
        Some(q) => q,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Query parameter is missing" })),
            );
        }
    };

    match state.inference.ask(&query).await {
        Ok(answer) => (StatusCode::OK, Json(json!({ "answer": answer }))),
        Err(e) => {
            // Detail stays in the log; the caller gets a generic failure.
            error!("Error querying inference service: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to get an answer from the Flask server" })),
            )
        }
    }
}
