use common::ColorScheme;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    pub scheme: ColorScheme,
    pub on_scheme_change: Callback<ColorScheme>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let onchange = {
        let on_scheme_change = props.on_scheme_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<ColorScheme>() {
                Ok(scheme) => {
                    log::debug!("Color scheme changed to {}", scheme);
                    on_scheme_change.emit(scheme);
                }
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    html! {
        <div style="padding: 20px;">
            <nav style="display: flex; gap: 16px; align-items: center; margin-bottom: 12px;">
                <Link<Route> to={Route::Home}>{"Live"}</Link<Route>>
                <Link<Route> to={Route::Sample}>{"Sample"}</Link<Route>>
                <label style="margin-left: auto;">
                    {"Colors "}
                    <select {onchange}>
                        { for [ColorScheme::Palette, ColorScheme::Spectrum].into_iter().map(|scheme| html! {
                            <option value={scheme.to_string()} selected={scheme == props.scheme}>
                                {scheme.to_string()}
                            </option>
                        }) }
                    </select>
                </label>
            </nav>
            <h2>{&props.title}</h2>
            { for props.children.iter() }
        </div>
    }
}
