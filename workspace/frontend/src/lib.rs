use common::ColorScheme;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod hooks;
pub mod settings;

pub use components::treemap::{PortfolioTreemap, PortfolioTreemapProps};

use components::layout::Layout;
use pages::portfolio::{LivePortfolio, SamplePortfolio};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sample")]
    Sample,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct PageProps {
    route: Route,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let scheme = use_state(|| settings::get_settings().color_scheme);

    let on_scheme_change = {
        let scheme = scheme.clone();
        Callback::from(move |new_scheme: ColorScheme| {
            settings::update_settings(|s| s.color_scheme = new_scheme);
            if let Err(e) = settings::get_settings().save_to_storage() {
                log::warn!("Failed to persist settings: {:?}", e);
            }
            scheme.set(new_scheme);
        })
    };

    let (title, content) = match props.route {
        Route::Home => {
            log::trace!("Rendering live portfolio");
            ("Portfolio Treemap", html! { <LivePortfolio scheme={*scheme} /> })
        }
        Route::Sample => {
            log::trace!("Rendering sample portfolio");
            ("Sample Portfolio", html! { <SamplePortfolio scheme={*scheme} /> })
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            ("404", html! { <h1>{"404 Not Found"}</h1> })
        }
    };

    html! {
        <Layout title={title} scheme={*scheme} on_scheme_change={on_scheme_change}>
            { content }
        </Layout>
    }
}

fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    html! { <Page route={route} /> }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Portfolio Treemap Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Portfolio URL: {}", settings.portfolio_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
