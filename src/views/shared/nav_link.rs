use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::models::route::Route;
use crate::state::app_state::AppState;

/// <a href> que navega con el router en vez de recargar la página
pub fn render_nav_link(
    state: &AppState,
    route: Route,
    text: &str,
    class: &str,
) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .attr("href", route.path())?
        .class(class)
        .text(text)
        .build();

    let state = state.clone();
    on_click(&link, move |e| {
        e.prevent_default();
        state.navigate(route);
    })?;

    Ok(link)
}
