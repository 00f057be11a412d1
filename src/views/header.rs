// ============================================================================
// HEADER - Navegación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::views::shared::render_nav_link;

const LINK_CLASS: &str = "px-3 py-2 rounded text-gray-700 hover:bg-gray-100";
const ACTIVE_LINK_CLASS: &str = "px-3 py-2 rounded bg-blue-600 text-white";

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let active = state.current_route();

    let header = ElementBuilder::new("header")?
        .class("bg-white shadow")
        .build();

    let nav = ElementBuilder::new("nav")?
        .class("max-w-4xl mx-auto flex items-center gap-2 p-3")
        .build();

    let brand = ElementBuilder::new("span")?
        .class("font-bold text-lg mr-auto")
        .text("Auth Portal")
        .build();
    append_child(&nav, &brand)?;

    for route in Route::ALL {
        let class = if route == active { ACTIVE_LINK_CLASS } else { LINK_CLASS };
        let link = render_nav_link(state, route, route.title(), class)?;
        append_child(&nav, &link)?;
    }

    append_child(&header, &nav)?;
    Ok(header)
}
