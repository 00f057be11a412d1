use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

pub fn render_about() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("max-w-2xl mx-auto p-6 space-y-4")
        .child(
            ElementBuilder::new("h1")?
                .class("text-3xl font-bold")
                .text("About")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("text-gray-700")
                .text("Account portal for registering, signing in and reviewing your session.")
                .build(),
        )?
        .build())
}
