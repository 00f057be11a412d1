// ============================================================================
// PROFILE VIEW - Token guardado + cerrar sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::state::field_input::FieldInputProps;
use crate::views::shared::{render_field_input, render_nav_link};

pub fn render_profile(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("max-w-2xl mx-auto p-6 space-y-4")
        .child(
            ElementBuilder::new("h1")?
                .class("text-3xl font-bold")
                .text("Profile")
                .build(),
        )?
        .build();

    let Some(token) = state.auth.current_token() else {
        let prompt = ElementBuilder::new("p")?
            .class("text-gray-700")
            .text("You are not signed in. ")
            .build();
        let login = render_nav_link(state, Route::Login, "Login", "text-blue-500 hover:underline")?;
        append_child(&prompt, &login)?;
        append_child(&page, &prompt)?;
        return Ok(page);
    };

    let props = FieldInputProps::new("Token")
        .name("token")
        .value(&token)
        .required(false)
        .disabled(true);
    let token_field = render_field_input(&props, None)?;
    append_child(&page, &token_field)?;

    let sign_out = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("py-2 px-4 rounded bg-red-600 hover:bg-red-700 text-white")
        .text("Sign out")
        .build();
    {
        let state = state.clone();
        on_click(&sign_out, move |_| {
            state.auth.sign_out();
            state.navigate(Route::Login);
        })?;
    }
    append_child(&page, &sign_out)?;

    Ok(page)
}
