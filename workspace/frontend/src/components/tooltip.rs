use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TreemapTooltipProps {
    pub name: String,
    /// Pre-formatted weight, e.g. "25.00%"
    pub weight: String,
    /// Anchor position in percent of the chart
    pub left: f64,
    pub top: f64,
}

#[function_component(TreemapTooltip)]
pub fn treemap_tooltip(props: &TreemapTooltipProps) -> Html {
    let style = format!(
        "position: absolute; left: {:.4}%; top: {:.4}%; transform: translate(-50%, -50%); \
         pointer-events: none; background: rgba(0, 0, 0, 0.75); color: #fff; \
         padding: 5px 10px; border-radius: 5px; white-space: nowrap; z-index: 10;",
        props.left, props.top
    );

    html! {
        <div class="treemap-tooltip" role="tooltip" {style}>
            <strong>{&props.name}</strong>
            <br />
            {tooltip_weight(&props.weight)}
        </div>
    }
}

fn tooltip_weight(weight: &str) -> String {
    format!("Weight: {}", weight)
}
