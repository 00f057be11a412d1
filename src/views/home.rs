use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::views::shared::render_nav_link;

const LINK_CLASS: &str = "text-blue-500 hover:underline";

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?
        .class("max-w-2xl mx-auto p-6 space-y-4")
        .child(
            ElementBuilder::new("h1")?
                .class("text-3xl font-bold")
                .text("Welcome")
                .build(),
        )?
        .build();

    if state.is_signed_in() {
        let signed_in = ElementBuilder::new("p")?
            .class("text-green-700")
            .text("You are signed in. ")
            .build();
        let profile =
            render_nav_link(state, Route::Profile, "Go to your profile", LINK_CLASS)?;
        append_child(&signed_in, &profile)?;
        append_child(&page, &signed_in)?;
    } else {
        let prompt = ElementBuilder::new("p")?
            .text("Sign in or create an account to continue. ")
            .build();
        let login = render_nav_link(state, Route::Login, "Login", &format!("{} mr-2", LINK_CLASS))?;
        let register = render_nav_link(state, Route::Register, "Register", LINK_CLASS)?;
        append_child(&prompt, &login)?;
        append_child(&prompt, &register)?;
        append_child(&page, &prompt)?;
    }

    Ok(page)
}
