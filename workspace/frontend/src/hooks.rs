use common::HoldingInput;
use std::future::Future;
use yew::prelude::*;

/// Fetch holdings once on mount.
///
/// Starts empty. A successful fetch replaces the holdings; a failed one is
/// only logged, so the view keeps whatever it showed before. There is no
/// retry and no timeout.
#[hook]
pub fn use_holdings<F, Fut>(fetch_fn: F) -> UseStateHandle<Vec<HoldingInput>>
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<HoldingInput>, String>> + 'static,
{
    let holdings = use_state(Vec::<HoldingInput>::new);

    {
        let holdings = holdings.clone();
        use_effect_with((), move |_| {
            log::debug!("Fetching portfolio holdings");
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_fn().await {
                    Ok(data) => {
                        log::info!("Received {} holdings", data.len());
                        holdings.set(data);
                    }
                    Err(err) => log::error!("Failed to load portfolio: {}", err),
                }
            });
            || ()
        });
    }

    holdings
}
