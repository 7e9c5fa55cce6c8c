use anyhow::{Context, Result};
use std::path::Path;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::initialize_app_state;
use crate::router::create_router;

pub async fn serve(holdings_file: Option<&Path>, bind_address: &str) -> Result<()> {
    info!("Portfolio treemap data service starting up");
    debug!("Holdings file: {:?}", holdings_file);

    let state = initialize_app_state(holdings_file).context("Failed to initialize application state")?;
    debug!("Serving {} holdings", state.holdings.len());

    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind to address {}", bind_address))?;

    info!("Portfolio available at http://{}/portfolio", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, create_router(state)).await.context("Server error")?;

    info!("Server shutdown gracefully");
    Ok(())
}
