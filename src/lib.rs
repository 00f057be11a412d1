// ============================================================================
// AUTH PORTAL - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que construyen DOM (sin lógica)
// - ViewModels: envío de formularios + orquestación
// - Services: SOLO HTTP y storage
// - State: FormState (reducer) + estado reactivo con Rc<RefCell>
// - Models: formularios, schemas, rutas y modelos de la API
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

mod app;
mod dom;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Auth Portal - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Botones atrás/adelante del navegador
    dom::on_popstate(|_e| {
        APP.with(|app_cell| match app_cell.borrow().as_ref() {
            Some(app) => app.state().sync_with_location(),
            None => log::warn!("⚠️ [ROUTER] App no está inicializada"),
        });
    })?;

    Ok(())
}

/// Re-render completo de la app (cambio de ruta)
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.borrow_mut().as_mut() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
    });
}
