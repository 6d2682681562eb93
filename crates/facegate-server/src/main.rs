//! FaceGate — gateway that runs face-registration/recognition workers and
//! proxies questions to the inference service.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use facegate_core::GatewayConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env();

    info!("Scripts directory: {}", config.scripts_dir.display());

    // A bare program name resolves through PATH at spawn time; only an
    // explicit path can be checked up front.
    if config.python_bin.components().count() > 1 {
        if config.python_bin.exists() {
            info!(
                "Python executable found at: {}",
                config.python_bin.display()
            );
        } else {
            warn!(
                "Python executable not found at: {}",
                config.python_bin.display()
            );
        }
    }

    let port = config.port;
    let state = Arc::new(AppState::new(config));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("FaceGate server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
