//! Shared application state.

use facegate_core::GatewayConfig;
use facegate_proxy::InferenceClient;
use facegate_worker::WorkerCommand;

/// Shared application state accessible from all route handlers.
///
/// Everything here is read-only after startup; per-request process state
/// lives entirely inside the handler that created it.
pub struct AppState {
    pub config: GatewayConfig,
    pub inference: InferenceClient,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        let inference = InferenceClient::new(config.inference_url.clone());
        Self { config, inference }
    }

    /// Command for one registration worker launch: the script plus the
    /// name as its sole positional argument.
    pub fn register_command(&self, name: &str) -> WorkerCommand {
        WorkerCommand {
            program: self.config.python_bin.clone(),
            args: vec![
                self.config.register_script_path().display().to_string(),
                name.to_string(),
            ],
            cwd: self.config.scripts_dir.clone(),
            env: self.config.worker_env(),
        }
    }

    /// Command for one recognition worker launch; the script takes no
    /// arguments.
    pub fn recognize_command(&self) -> WorkerCommand {
        WorkerCommand {
            program: self.config.python_bin.clone(),
            args: vec![self.config.recognize_script_path().display().to_string()],
            cwd: self.config.scripts_dir.clone(),
            env: self.config.worker_env(),
        }
    }
}
