// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Listeners sobre elementos del DOM: cuando el elemento se destruye (p.ej. con
// set_inner_html("")) el navegador limpia los listeners, así que
// closure.forget() es seguro. Los listeners globales (window) se registran
// UNA sola vez en el arranque.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent};

/// Registrar un listener genérico y mantener vivo el closure
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Cada tecla en un <input>
pub fn on_input<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "input", handler)
}

/// <select> cambió de opción
pub fn on_change<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "change", handler)
}

/// El control perdió el foco
pub fn on_blur<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "blur", handler)
}

/// Submit de formulario, con prevent_default ya aplicado
pub fn on_submit<F>(target: &EventTarget, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    on_event(target, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// popstate (botones atrás/adelante). Registrar una sola vez.
pub fn on_popstate<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    on_event(&win, "popstate", handler)
}
