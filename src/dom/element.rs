// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

pub fn remove_attribute(element: &Element, name: &str) -> Result<(), JsValue> {
    element.remove_attribute(name)
}

/// Atributo booleano (disabled, required...): presente o ausente
pub fn set_flag(element: &Element, name: &str, enabled: bool) -> Result<(), JsValue> {
    if enabled {
        set_attribute(element, name, "")
    } else {
        remove_attribute(element, name)
    }
}

/// Valor actual de un <input> o <select>
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| select.value())
}

/// Escribir el valor de un <input> o <select> si ha cambiado
pub fn set_control_value(element: &Element, value: &str) {
    if control_value(element).as_deref() == Some(value) {
        return;
    }
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    }
}

/// Valor del control que disparó el evento
pub fn event_target_value(event: &web_sys::Event) -> Option<String> {
    let target = event.target()?;
    let element = target.dyn_ref::<Element>()?;
    control_value(element)
}

/// location.pathname actual ("/" si no hay window)
pub fn current_pathname() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// history.pushState sin recargar la página
pub fn push_history_path(path: &str) -> Result<(), JsValue> {
    let history = window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(path))
}
