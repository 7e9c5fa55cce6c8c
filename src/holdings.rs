use common::HoldingInput;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum HoldingsError {
    #[error("failed to read holdings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("holdings file {path} is not a JSON array of holdings: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load holdings from a JSON file, or the sample portfolio when no file is given.
pub fn load_holdings(path: Option<&Path>) -> Result<Vec<HoldingInput>, HoldingsError> {
    let Some(path) = path else {
        info!("No holdings file configured, serving sample portfolio");
        return Ok(common::sample_portfolio());
    };

    debug!("Reading holdings from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|source| HoldingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let holdings = parse_holdings(&contents).map_err(|source| HoldingsError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} holdings from {}", holdings.len(), path.display());
    Ok(holdings)
}

pub fn parse_holdings(json: &str) -> Result<Vec<HoldingInput>, serde_json::Error> {
    serde_json::from_str(json)
}
