use common::{ColorScheme, Holding, HoldingInput, NormalizedSlice, Weight};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Holdings served verbatim at /portfolio, fixed at startup
    pub holdings: Arc<Vec<HoldingInput>>,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of holdings being served
    pub holdings: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::portfolio::get_portfolio,
    ),
    components(
        schemas(
            HealthResponse,
            HoldingInput,
            Holding,
            Weight,
            NormalizedSlice,
            ColorScheme,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "portfolio", description = "Portfolio holdings endpoints"),
    ),
    info(
        title = "Portfolio Treemap API",
        description = "Holdings data source for the portfolio treemap frontend",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
