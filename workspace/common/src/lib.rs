//! Common portfolio types shared between backend and frontend.
//! The backend serves `HoldingInput` lists, the frontend and the CLI turn them
//! into an `Allocation` and lay it out as a treemap.

mod colors;
mod holding;
pub mod layout;
mod normalize;

pub use colors::{ColorScheme, PALETTE, ParseColorSchemeError};
pub use holding::{Holding, HoldingInput, Weight};
pub use layout::{Rect, TREEMAP_RATIO, Tile, squarify};
pub use normalize::{Allocation, NormalizedSlice, normalize, normalize_inputs};

/// Placeholder shown instead of a treemap when there is nothing to draw.
pub const NO_DATA_MESSAGE: &str = "No portfolio data available";

/// Sample portfolio used when no live data source is configured.
pub fn sample_portfolio() -> Vec<HoldingInput> {
    [
        ("AAPL", 25),
        ("MSFT", 18),
        ("GOOG", 12),
        ("AMZN", 9),
        ("TSLA", 8),
        ("NVDA", 6),
        ("BRK.B", 5),
        ("META", 4),
        ("V", 7),
        ("JNJ", 6),
    ]
    .into_iter()
    .map(|(symbol, weight)| HoldingInput::Record {
        symbol: symbol.to_string(),
        weight: Some(weight.into()),
    })
    .collect()
}
