use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use common::HoldingInput;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Create AppState serving the given holdings
pub fn setup_test_app_state(holdings: Vec<HoldingInput>) -> AppState {
    AppState {
        holdings: Arc::new(holdings),
    }
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is determined by the RUST_LOG environment variable,
/// defaulting to WARN if not set.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing
pub fn setup_test_app(holdings: Vec<HoldingInput>) -> Router {
    let _guard = init_test_tracing();
    create_router(setup_test_app_state(holdings))
}

/// Create axum app serving the sample portfolio
pub fn setup_sample_app() -> Router {
    setup_test_app(common::sample_portfolio())
}
