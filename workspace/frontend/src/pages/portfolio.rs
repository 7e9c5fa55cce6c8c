use common::ColorScheme;
use yew::prelude::*;

use crate::api_client::fetch_portfolio;
use crate::components::treemap::PortfolioTreemap;
use crate::hooks::use_holdings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub scheme: ColorScheme,
}

/// Treemap fed by the configured data service.
#[function_component(LivePortfolio)]
pub fn live_portfolio(props: &Props) -> Html {
    let holdings = use_holdings(fetch_portfolio);

    html! {
        <PortfolioTreemap data={(*holdings).clone()} scheme={props.scheme} />
    }
}

/// Treemap of the built-in sample portfolio.
#[function_component(SamplePortfolio)]
pub fn sample_portfolio(props: &Props) -> Html {
    let holdings = use_memo((), |_| common::sample_portfolio());

    html! {
        <PortfolioTreemap data={(*holdings).clone()} scheme={props.scheme} />
    }
}
