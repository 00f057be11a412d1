// ============================================================================
// REGISTER VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::models::form::FormKind;
use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::utils::constants::ROLE_OPTIONS;
use crate::views::shared::auth_form::{render_auth_form, FormFooter};
use crate::views::shared::form_field::{Control, FieldSpec};

const REGISTER_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "userName",
        control: Control::Input {
            input_type: "text",
            placeholder: "userName",
        },
    },
    FieldSpec {
        name: "email",
        control: Control::Input {
            input_type: "email",
            placeholder: "your@email.com",
        },
    },
    FieldSpec {
        name: "password",
        control: Control::Input {
            input_type: "password",
            placeholder: "Password",
        },
    },
    FieldSpec {
        name: "role",
        control: Control::Select {
            options: &ROLE_OPTIONS,
        },
    },
];

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [REGISTER] render_register() llamado");

    render_auth_form(
        state,
        FormKind::Register,
        &REGISTER_FIELDS,
        FormFooter {
            prompt: "Already have an account?",
            route: Route::Login,
        },
    )
}
