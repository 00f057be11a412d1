// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::models::form::FormKind;
use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::views::shared::auth_form::{render_auth_form, FormFooter};
use crate::views::shared::form_field::{Control, FieldSpec};

const LOGIN_FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        name: "userName",
        control: Control::Input {
            input_type: "text",
            placeholder: "youremail@gmail.com",
        },
    },
    FieldSpec {
        name: "password",
        control: Control::Input {
            input_type: "password",
            placeholder: "password",
        },
    },
];

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    render_auth_form(
        state,
        FormKind::Login,
        &LOGIN_FIELDS,
        FormFooter {
            prompt: "Don't have an account?",
            route: Route::Register,
        },
    )
}
