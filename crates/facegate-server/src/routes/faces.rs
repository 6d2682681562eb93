//! Face worker routes — registration and recognition.
//! Matches the /api/register and /api/recognize endpoints of the original
//! Express server.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::state::AppState;
use facegate_core::Error;
use facegate_worker::{run_worker, WorkerOutcome};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/recognize", get(recognize))
}

#[derive(Debug, Default, Deserialize)]
struct RegisterBody {
    #[serde(default)]
    name: Option<String>,
}

async fn register(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RegisterBody>, JsonRejection>,
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

    // Validate before anything is spawned. The accepted name reaches the
    // worker exactly as given.
    let name = match body.name.filter(|n| !n.is_empty()) {
        Some(n) => n,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Name is required" })),
            );
        }
    };

    info!(
        "Calling {} with name: {}",
        state.config.register_script, name
    );

    match run_worker(&state.register_command(&name)).await {
        Ok(WorkerOutcome::Success { stdout }) => (
            StatusCode::OK,
            Json(json!({
                "message": format!("Face registered for {}", name),
                "output": stdout,
            })),
        ),
        Ok(WorkerOutcome::Failure {
            exit_code, stderr, ..
        }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": format!("Registration failed with code {}: {}", exit_code, stderr),
            })),
        ),
        Err(Error::Spawn(detail)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Registration failed: {}", detail) })),
        ),
        Err(e) => {
            error!("Registration error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Registration failed: {}", e) })),
            )
        }
    }
}

async fn recognize(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!("Calling {}", state.config.recognize_script);

    match run_worker(&state.recognize_command()).await {
        Ok(WorkerOutcome::Success { stdout }) => (
            StatusCode::OK,
            Json(json!({
                "message": "Recognition started",
                "output": stdout,
            })),
        ),
        Ok(WorkerOutcome::Failure {
            exit_code, stderr, ..
        }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": format!("Recognition failed with code {}: {}", exit_code, stderr),
            })),
        ),
        Err(Error::Spawn(detail)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Recognition failed: {}", detail) })),
        ),
        Err(e) => {
            error!("Recognition error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Recognition failed: {}", e) })),
            )
        }
    }
}
