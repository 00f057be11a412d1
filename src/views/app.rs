// ============================================================================
// APP VIEW - Header + página de la ruta activa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::views::{
    render_about, render_header, render_home, render_login, render_profile, render_register,
};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.current_route();
    log::debug!("🎬 [APP] render_app() para {}", route.path());

    let shell = ElementBuilder::new("div")?
        .class("min-h-screen bg-gray-100")
        .build();

    append_child(&shell, &render_header(state)?)?;

    let page = match route {
        Route::Home => render_home(state)?,
        Route::Register => render_register(state)?,
        Route::Login => render_login(state)?,
        Route::About => render_about()?,
        Route::Profile => render_profile(state)?,
    };

    let main = ElementBuilder::new("main")?.child(page)?.build();
    append_child(&shell, &main)?;

    Ok(shell)
}
