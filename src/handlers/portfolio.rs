use axum::{extract::State, response::Json};
use common::HoldingInput;
use tracing::{debug, instrument};
use crate::schemas::AppState;

/// Get the portfolio holdings
///
/// Returns a plain JSON array. Entries keep the shape they were configured
/// with: `{"symbol", "weight"}` objects or `[symbol, weight]` pairs.
#[utoipa::path(
    get,
    path = "/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Portfolio holdings as objects or [symbol, weight] pairs", body = Vec<HoldingInput>)
    )
)]
#[instrument(skip(state))]
pub async fn get_portfolio(State(state): State<AppState>) -> Json<Vec<HoldingInput>> {
    debug!("Serving {} holdings", state.holdings.len());
    Json(state.holdings.as_ref().clone())
}
