// ============================================================================
// APP - Aplicación principal
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, current_pathname, get_element_by_id, set_inner_html};
use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let route = Route::from_path(&current_pathname());
        let state = AppState::new(route);

        if state.is_signed_in() {
            log::info!("💾 [APP] Token encontrado en storage");
        }

        // Cambio de ruta -> re-render completo, batcheado con Timeout(0)
        state.route.subscribe(move |route| {
            log::debug!("🧭 [APP] Ruta cambiada a {}", route.path());
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
