//! Error types for FaceGate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to spawn worker: {0}")]
    Spawn(String),

    #[error("Worker exited with code {code}: {stderr}")]
    Worker { code: i32, stderr: String },

    #[error("Inference service error: {0}")]
    Proxy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
