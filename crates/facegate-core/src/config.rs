//! Gateway configuration, populated once at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment override applied to every worker process. Keeps macOS from
/// handing the workers a Continuity camera instead of the local one.
pub const CAMERA_ENV_KEY: &str = "NSCameraUseContinuityCameraDeviceType";
pub const CAMERA_ENV_VALUE: &str = "NO";

/// Top-level gateway configuration.
///
/// Built from the environment once in `main` and passed by reference into
/// the supervisor and proxy; nothing mutates it after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server port.
    pub port: u16,
    /// Interpreter used to run the worker scripts.
    pub python_bin: PathBuf,
    /// Directory containing the worker scripts; also the workers' cwd.
    pub scripts_dir: PathBuf,
    /// Registration worker script, relative to `scripts_dir`.
    pub register_script: String,
    /// Recognition worker script, relative to `scripts_dir`.
    pub recognize_script: String,
    /// Endpoint of the downstream inference service.
    pub inference_url: String,
}

impl GatewayConfig {
    /// Create configuration from environment variables and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("FACEGATE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5001);

        let python_bin = std::env::var("FACEGATE_PYTHON")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("python3"));

        let scripts_dir = std::env::var("FACEGATE_SCRIPTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("backend"));

        let register_script = std::env::var("FACEGATE_REGISTER_SCRIPT")
            .unwrap_or_else(|_| "register.py".to_string());

        let recognize_script = std::env::var("FACEGATE_RECOGNIZE_SCRIPT")
            .unwrap_or_else(|_| "recognize.py".to_string());

        let inference_url = std::env::var("FACEGATE_INFERENCE_URL")
            .unwrap_or_else(|_| "http://localhost:8765/api/ask".to_string());

        Self {
            port,
            python_bin,
            scripts_dir,
            register_script,
            recognize_script,
            inference_url,
        }
    }

    /// Absolute-ish path of the registration worker script.
    pub fn register_script_path(&self) -> PathBuf {
        self.scripts_dir.join(&self.register_script)
    }

    /// Absolute-ish path of the recognition worker script.
    pub fn recognize_script_path(&self) -> PathBuf {
        self.scripts_dir.join(&self.recognize_script)
    }

    /// Environment overrides merged onto the host environment for every
    /// worker invocation.
    pub fn worker_env(&self) -> Vec<(String, String)> {
        vec![(CAMERA_ENV_KEY.to_string(), CAMERA_ENV_VALUE.to_string())]
    }
}
