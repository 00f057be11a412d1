// ============================================================================
// FORM FIELD - Control + texto de error enlazados al FormController
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, event_target_value, on_blur, on_change, on_input, ElementBuilder};
use crate::state::app_state::BrowserFormController;
use crate::utils::constants::FIELD_ERROR_CLASS;

const CONTROL_CLASS: &str = "w-full p-2 rounded shadow-md";

/// Tipo de control de un campo
#[derive(Clone, Copy, Debug)]
pub enum Control {
    Input {
        input_type: &'static str,
        placeholder: &'static str,
    },
    Select {
        options: &'static [&'static str],
    },
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub control: Control,
}

/// Elementos que la sincronización incremental actualiza
pub struct FieldBinding {
    pub name: &'static str,
    pub control: Element,
    pub error: Element,
}

/// Renderizar un campo y registrar sus listeners (change + blur)
pub fn render_form_field(
    spec: &FieldSpec,
    controller: &BrowserFormController,
) -> Result<(Element, FieldBinding), JsValue> {
    let group = ElementBuilder::new("div")?.build();

    let control = match spec.control {
        Control::Input { input_type, placeholder } => {
            let input = ElementBuilder::new("input")?
                .attr("type", input_type)?
                .attr("name", spec.name)?
                .attr("placeholder", placeholder)?
                .class(CONTROL_CLASS)
                .build();

            let controller_clone = controller.clone();
            let name = spec.name;
            on_input(&input, move |e| {
                if let Some(value) = event_target_value(&e) {
                    controller_clone.handle_change(name, &value);
                }
            })?;
            input
        }
        Control::Select { options } => {
            let select = ElementBuilder::new("select")?
                .attr("name", spec.name)?
                .class(CONTROL_CLASS)
                .build();

            for option in options {
                let option_el = ElementBuilder::new("option")?
                    .attr("value", option)?
                    .text(&option_label(option))
                    .build();
                append_child(&select, &option_el)?;
            }

            let controller_clone = controller.clone();
            let name = spec.name;
            on_change(&select, move |e| {
                if let Some(value) = event_target_value(&e) {
                    controller_clone.handle_change(name, &value);
                }
            })?;
            select
        }
    };

    {
        let controller_clone = controller.clone();
        let name = spec.name;
        on_blur(&control, move |_| controller_clone.handle_blur(name))?;
    }

    let error = ElementBuilder::new("p")?
        .class(&format!("{} hidden", FIELD_ERROR_CLASS))
        .build();

    append_child(&group, &control)?;
    append_child(&group, &error)?;

    Ok((
        group,
        FieldBinding {
            name: spec.name,
            control,
            error,
        },
    ))
}

/// Primera letra en mayúscula, resto tal cual
fn option_label(option: &str) -> String {
    let mut chars = option.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
