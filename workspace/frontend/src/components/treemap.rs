use common::{
    Allocation, ColorScheme, HoldingInput, NO_DATA_MESSAGE, NormalizedSlice, Rect, TREEMAP_RATIO,
    Tile, normalize_inputs, squarify,
};
use yew::prelude::*;

use super::tooltip::TreemapTooltip;

/// Width of the SVG coordinate system. The chart scales to its container and
/// keeps a `LAYOUT_WIDTH : height` aspect ratio.
const LAYOUT_WIDTH: f64 = 1000.0;
/// Rough width of one label character in layout units.
const LABEL_CHAR_WIDTH: f64 = 8.0;
const LABEL_MIN_HEIGHT: f64 = 22.0;
const LABEL_PADDING: f64 = 4.0;
const LABEL_FONT_SIZE: f64 = 13.0;

#[derive(Properties, PartialEq)]
pub struct PortfolioTreemapProps {
    /// Holdings in either wire shape
    pub data: Vec<HoldingInput>,
    /// Display mode: palette cycling or hue spread
    #[prop_or_default]
    pub scheme: ColorScheme,
    /// Chart height in layout units
    #[prop_or(500)]
    pub height: u32,
}

/// Portfolio allocation treemap.
///
/// Normalizes `data` into percentage slices and tiles them with the
/// squarified layout into an SVG. Hovering or focusing a tile shows its name
/// and weight. Empty data renders a placeholder instead of an empty chart.
#[function_component(PortfolioTreemap)]
pub fn portfolio_treemap(props: &PortfolioTreemapProps) -> Html {
    let active = use_state(|| None::<usize>);
    let allocation = use_memo(props.data.clone(), |data| normalize_inputs(data.clone()));

    let slices = match &*allocation {
        Allocation::Empty => {
            log::debug!("Rendering treemap placeholder");
            return html! { <div class="treemap-empty" style="padding: 16px;">{NO_DATA_MESSAGE}</div> };
        }
        Allocation::Slices(slices) => slices,
    };

    let bounds = Rect::new(0.0, 0.0, LAYOUT_WIDTH, props.height as f64);
    let tiles = layout_tiles(slices, bounds);
    log::trace!("Laid out {} tiles for {} slices", tiles.len(), slices.len());

    let on_active = {
        let active = active.clone();
        Callback::from(move |index: Option<usize>| active.set(index))
    };

    let tooltip = (*active)
        .and_then(|index| tiles.iter().find(|t| t.index == index))
        .map(|tile| {
            let slice = &slices[tile.index];
            let (cx, cy) = tile.rect.center();
            html! {
                <TreemapTooltip
                    name={slice.name.clone()}
                    weight={slice.display_size()}
                    left={cx / bounds.width * 100.0}
                    top={cy / bounds.height * 100.0}
                />
            }
        });

    html! {
        <div class="treemap" style="position: relative; width: 100%;">
            <svg
                viewBox={view_box(&bounds)}
                width="100%"
                style="display: block;"
                role="group"
                aria-label="Portfolio allocation"
            >
                { for tiles.iter().map(|tile| {
                    let slice = &slices[tile.index];
                    html! {
                        <TreemapTile
                            key={tile.index}
                            index={tile.index}
                            name={slice.name.clone()}
                            weight={slice.display_size()}
                            color={props.scheme.color(tile.index, slices.len())}
                            rect={tile.rect}
                            show_label={label_fits(&tile.rect, &slice.name)}
                            on_active={on_active.clone()}
                        />
                    }
                }) }
            </svg>
            { tooltip.unwrap_or_default() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TreemapTileProps {
    index: usize,
    name: String,
    weight: String,
    color: String,
    rect: Rect,
    show_label: bool,
    on_active: Callback<Option<usize>>,
}

#[function_component(TreemapTile)]
fn treemap_tile(props: &TreemapTileProps) -> Html {
    let activate = {
        let on_active = props.on_active.clone();
        let index = props.index;
        move || on_active.emit(Some(index))
    };
    let deactivate = {
        let on_active = props.on_active.clone();
        move || on_active.emit(None)
    };

    let onmouseenter = {
        let activate = activate.clone();
        Callback::from(move |_: MouseEvent| activate())
    };
    let onfocus = Callback::from(move |_: FocusEvent| activate());
    let onmouseleave = {
        let deactivate = deactivate.clone();
        Callback::from(move |_: MouseEvent| deactivate())
    };
    let onblur = Callback::from(move |_: FocusEvent| deactivate());

    let rect = props.rect;
    html! {
        <g
            class="treemap-tile"
            tabindex="0"
            aria-label={format!("{}: {}", props.name, props.weight)}
            {onmouseenter}
            {onmouseleave}
            {onfocus}
            {onblur}
        >
            <title>{format!("{}\nWeight: {}", props.name, props.weight)}</title>
            <rect
                x={rect.x.to_string()}
                y={rect.y.to_string()}
                width={rect.width.to_string()}
                height={rect.height.to_string()}
                fill={props.color.clone()}
                stroke="#fff"
            />
            if props.show_label {
                <text
                    x={(rect.x + LABEL_PADDING).to_string()}
                    y={(rect.y + LABEL_PADDING + LABEL_FONT_SIZE).to_string()}
                    fill="#fff"
                    font-size={LABEL_FONT_SIZE.to_string()}
                    pointer-events="none"
                >
                    {&props.name}
                </text>
            }
        </g>
    }
}

fn layout_tiles(slices: &[NormalizedSlice], bounds: Rect) -> Vec<Tile> {
    let sizes: Vec<f64> = slices.iter().map(|s| s.size).collect();
    squarify(&sizes, bounds, TREEMAP_RATIO)
}

fn view_box(bounds: &Rect) -> String {
    format!("{} {} {} {}", bounds.x, bounds.y, bounds.width, bounds.height)
}

/// Whether a label for `name` fits inside the tile.
fn label_fits(rect: &Rect, name: &str) -> bool {
    let needed = name.chars().count() as f64 * LABEL_CHAR_WIDTH + LABEL_CHAR_WIDTH;
    rect.width >= needed && rect.height >= LABEL_MIN_HEIGHT
}
