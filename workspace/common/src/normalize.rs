//! Weight normalization.
//!
//! Turns raw holdings into percentage slices that sum to 100. Normalization
//! never fails: unusable weights are already zero by the time they get here,
//! and when nothing positive is left every holding counts equally.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::holding::{Holding, HoldingInput};

/// One treemap region: a label and its share of the portfolio in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedSlice {
    pub name: String,
    /// Percentage in `[0, 100]`, unrounded.
    pub size: f64,
}

impl NormalizedSlice {
    /// Size with two decimals and a `%` suffix, e.g. `"25.00%"`.
    pub fn display_size(&self) -> String {
        format!("{:.2}%", self.size)
    }
}

/// Result of normalizing a holding list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "slices", rename_all = "snake_case")]
pub enum Allocation {
    /// Nothing to draw. Rendered as a placeholder, never as an empty treemap.
    Empty,
    Slices(Vec<NormalizedSlice>),
}

impl Allocation {
    pub fn is_empty(&self) -> bool {
        matches!(self, Allocation::Empty)
    }

    pub fn slices(&self) -> &[NormalizedSlice] {
        match self {
            Allocation::Empty => &[],
            Allocation::Slices(slices) => slices,
        }
    }

    pub fn total_size(&self) -> f64 {
        self.slices().iter().map(|s| s.size).sum()
    }
}

/// Normalize holdings into percentage slices, preserving input order.
///
/// With a positive weight total each slice is `weight / total * 100`.
/// Otherwise every holding gets weight 1 and the denominator is the count.
///
/// Weights are scaled by the largest one before summing, so huge finite
/// weights cannot overflow the total.
pub fn normalize(holdings: &[Holding]) -> Allocation {
    if holdings.is_empty() {
        tracing::debug!("No holdings to normalize");
        return Allocation::Empty;
    }

    let largest = holdings.iter().map(|h| h.weight.value()).fold(0.0, f64::max);
    let equal_weight = largest <= 0.0;
    let scaled: Vec<f64> = holdings
        .iter()
        .map(|h| if equal_weight { 1.0 } else { h.weight.value() / largest })
        .collect();
    let denominator: f64 = scaled.iter().sum();

    tracing::debug!(
        count = holdings.len(),
        largest,
        equal_weight,
        "Normalizing holdings"
    );

    let slices = holdings
        .iter()
        .zip(scaled)
        .map(|(h, weight)| NormalizedSlice {
            name: h.symbol.clone(),
            size: weight / denominator * 100.0,
        })
        .collect();

    Allocation::Slices(slices)
}

/// Coerce wire-shaped holdings and normalize them.
pub fn normalize_inputs(inputs: Vec<HoldingInput>) -> Allocation {
    let holdings: Vec<Holding> = inputs.into_iter().map(Holding::from).collect();
    normalize(&holdings)
}
