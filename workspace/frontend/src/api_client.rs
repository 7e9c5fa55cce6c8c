use common::HoldingInput;
use gloo_net::http::Request;
use serde::Deserialize;
use crate::settings;

/// GET a JSON document from an absolute URL
pub async fn get_json<T>(url: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    log::debug!("GET request to: {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", url, error_msg);
            error_msg
        })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", url, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", url, error_msg);
            error_msg
        })?;

    log::info!("GET {} - Success", url);
    Ok(data)
}

/// Fetch holdings from the configured data service
pub async fn fetch_portfolio() -> Result<Vec<HoldingInput>, String> {
    let url = settings::get_settings().portfolio_url();
    get_json(&url).await
}
