use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::holdings::load_holdings;
use crate::schemas::AppState;

/// Initialize application state from an optional holdings file
pub fn initialize_app_state(holdings_file: Option<&Path>) -> Result<AppState> {
    match holdings_file {
        Some(path) => tracing::info!("Loading holdings from: {}", path.display()),
        None => tracing::info!("Using built-in sample holdings"),
    }

    let holdings = load_holdings(holdings_file)?;

    Ok(AppState {
        holdings: Arc::new(holdings),
    })
}
