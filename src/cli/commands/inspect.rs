use anyhow::Result;
use common::{Allocation, ColorScheme, HoldingInput, NO_DATA_MESSAGE, normalize_inputs};
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::holdings::load_holdings;

/// Where `inspect` reads holdings from
pub enum InspectSource {
    Url(String),
    File(PathBuf),
}

pub async fn inspect(source: InspectSource, scheme: ColorScheme) -> Result<()> {
    let holdings = match source {
        InspectSource::File(path) => load_holdings(Some(&path))?,
        InspectSource::Url(url) => match fetch_holdings(&url).await {
            Ok(holdings) => holdings,
            Err(e) => {
                // A failed fetch leaves nothing to show, same as the browser view.
                error!("Failed to fetch portfolio from {}: {}", url, e);
                Vec::new()
            }
        },
    };

    let allocation = normalize_inputs(holdings);
    print!("{}", format_allocation(&allocation, scheme));
    Ok(())
}

/// Single GET, no retry and no timeout
async fn fetch_holdings(url: &str) -> Result<Vec<HoldingInput>> {
    debug!("GET request to: {}", url);
    let response = reqwest::get(url).await?.error_for_status()?;
    let holdings: Vec<HoldingInput> = response.json().await?;
    info!("GET {} - received {} holdings", url, holdings.len());
    Ok(holdings)
}

/// One line per slice: symbol, percentage, color
fn format_allocation(allocation: &Allocation, scheme: ColorScheme) -> String {
    let slices = match allocation {
        Allocation::Empty => return format!("{}\n", NO_DATA_MESSAGE),
        Allocation::Slices(slices) => slices,
    };

    let name_width = slices
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("SYMBOL".len());
    let mut out = format!("{:<name_width$}  {:>8}  {}\n", "SYMBOL", "WEIGHT", "COLOR");
    for (index, slice) in slices.iter().enumerate() {
        out.push_str(&format!(
            "{:<name_width$}  {:>8}  {}\n",
            slice.name,
            slice.display_size(),
            scheme.color(index, slices.len())
        ));
    }
    out
}
