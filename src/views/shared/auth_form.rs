// ============================================================================
// AUTH FORM - Página de formulario compartida por Login y Register
// ============================================================================
// El DOM se construye una vez; después cada cambio del FormState se aplica
// de forma incremental (errores, botón, mensaje, valores tras reset) para
// no perder el foco del input.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, on_submit, set_class_name, set_control_value, set_flag, set_text_content,
    ElementBuilder,
};
use crate::models::form::FormKind;
use crate::models::route::Route;
use crate::state::app_state::AppState;
use crate::state::form_state::{FormState, Transition};
use crate::utils::constants::{
    BUTTON_BUSY_CLASS, BUTTON_IDLE_CLASS, FIELD_ERROR_CLASS, MESSAGE_ERROR_CLASS,
    MESSAGE_SUCCESS_CLASS,
};
use crate::views::shared::form_field::{render_form_field, FieldBinding, FieldSpec};
use crate::views::shared::nav_link::render_nav_link;

/// Enlace a la página hermana al pie del formulario
pub struct FormFooter {
    pub prompt: &'static str,
    pub route: Route,
}

struct FormBindings {
    kind: FormKind,
    fields: Vec<FieldBinding>,
    button: Element,
    message: Element,
}

pub fn render_auth_form(
    state: &AppState,
    kind: FormKind,
    fields: &[FieldSpec],
    footer: FormFooter,
) -> Result<Element, JsValue> {
    let controller = state.form_controller(kind);

    let screen = ElementBuilder::new("div")?
        .class("min-h-screen flex items-center justify-center bg-gray-100 p-4")
        .build();

    let form = ElementBuilder::new("form")?
        .class("bg-white p-6 rounded-xl shadow-lg w-full max-w-md space-y-4")
        .attr("novalidate", "")?
        .build();

    let title = ElementBuilder::new("h2")?
        .class("text-2xl font-semibold text-center")
        .text(kind.title())
        .build();
    append_child(&form, &title)?;

    let mut field_bindings = Vec::with_capacity(fields.len());
    for spec in fields {
        let (group, binding) = render_form_field(spec, &controller)?;
        append_child(&form, &group)?;
        field_bindings.push(binding);
    }

    let button = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .build();
    append_child(&form, &button)?;

    let message = ElementBuilder::new("p")?.build();
    append_child(&form, &message)?;

    let footer_el = ElementBuilder::new("p")?
        .class("w-full mt-4 text-center")
        .text(footer.prompt)
        .build();
    let link_wrapper = ElementBuilder::new("span")?
        .class("ml-2 text-blue-500 hover:underline")
        .build();
    let link = render_nav_link(state, footer.route, footer.route.title(), "")?;
    append_child(&link_wrapper, &link)?;
    append_child(&footer_el, &link_wrapper)?;
    append_child(&form, &footer_el)?;

    append_child(&screen, &form)?;

    // Estado inicial + suscripción para las actualizaciones incrementales
    let bindings = Rc::new(FormBindings {
        kind,
        fields: field_bindings,
        button,
        message,
    });
    controller.form().with(|form_state| sync_form_view(&bindings, form_state))?;
    {
        let bindings = bindings.clone();
        controller.form().subscribe(move |form_state| {
            if let Err(e) = sync_form_view(&bindings, form_state) {
                log::error!("❌ [FORM] Error sincronizando vista: {:?}", e);
            }
        });
    }

    {
        let controller = controller.clone();
        let state = state.clone();
        on_submit(&form, move || {
            let controller = controller.clone();
            let state = state.clone();
            spawn_local(async move {
                if let Transition::Navigate(route) = controller.submit().await {
                    state.navigate(route);
                }
            });
        })?;
    }

    Ok(screen)
}

/// Aplicar el FormState al DOM ya construido
fn sync_form_view(bindings: &FormBindings, form: &FormState) -> Result<(), JsValue> {
    for field in &bindings.fields {
        set_control_value(&field.control, form.value(field.name));

        match form.visible_error(field.name) {
            Some(error) => {
                set_text_content(&field.error, error);
                set_class_name(&field.error, FIELD_ERROR_CLASS);
            }
            None => {
                set_text_content(&field.error, "");
                set_class_name(&field.error, &format!("{} hidden", FIELD_ERROR_CLASS));
            }
        }
    }

    let submitting = form.is_submitting();
    set_flag(&bindings.button, "disabled", submitting)?;
    set_text_content(&bindings.button, bindings.kind.submit_label(submitting));
    set_class_name(
        &bindings.button,
        if submitting { BUTTON_BUSY_CLASS } else { BUTTON_IDLE_CLASS },
    );

    let result = form.result();
    set_text_content(&bindings.message, &result.message);
    let message_class = if result.success { MESSAGE_SUCCESS_CLASS } else { MESSAGE_ERROR_CLASS };
    if result.message.is_empty() {
        set_class_name(&bindings.message, &format!("{} hidden", message_class));
    } else {
        set_class_name(&bindings.message, message_class);
    }

    Ok(())
}
