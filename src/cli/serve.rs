use std::path::PathBuf;

use tracing::{info, warn};

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::ServerConfig;
use crate::errors::CostscopeError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), CostscopeError> {
    let mut config = ServerConfig::from_env()?;
    if let Some(data) = args.data {
        config.data_path = PathBuf::from(data);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.host = args.host;

    info!(
        host = %config.host,
        port = config.port,
        data_path = %config.data_path.display(),
        "Starting API server"
    );

    if !config.data_path.exists() {
        warn!(path = %config.data_path.display(), "Data directory does not exist");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = api::create_app_state(config);
    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| CostscopeError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
