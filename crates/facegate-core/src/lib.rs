//! FaceGate Core — gateway configuration and shared error types.

pub mod config;
pub mod error;

pub use config::GatewayConfig;
pub use error::{Error, Result};
